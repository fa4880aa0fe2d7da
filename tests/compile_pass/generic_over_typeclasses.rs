use maybe_result::prelude::*;

fn render<M>(container: M) -> M::WithType<String>
where
    M: Functor<Inner = i32>,
{
    container.fmap(|n| n.to_string())
}

fn halve<M>(container: M, lift: fn(i32) -> M::WithType<i32>) -> M::WithType<i32>
where
    M: Monad<Inner = i32>,
{
    container.flat_map(move |n| lift(n / 2))
}

fn main() {
    assert_eq!(render(Maybe::present(7)), Maybe::present("7".to_string()));
    assert_eq!(
        render(Outcome::<i32, ()>::failure(())),
        Outcome::failure(())
    );
    assert_eq!(halve(Maybe::present(8), Maybe::present), Maybe::present(4));
}
