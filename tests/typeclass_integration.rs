#![cfg(all(feature = "typeclass", feature = "control"))]
//! Generic code written against `Functor` and `Monad`, exercised with every
//! wrapper type and with the native `Option` and `Result`.

use rstest::rstest;
use uogtad::control::{Either, Fallible, Maybe};
use uogtad::typeclass::{Functor, Monad};

fn double<M>(container: M) -> M::WithType<i32>
where
    M: Functor<Inner = i32>,
{
    container.fmap(|value| value * 2)
}

#[rstest]
fn double_works_for_every_wrapper() {
    assert_eq!(double(Either::<i32, &str>::new(21)), Either::new(42));
    assert_eq!(double(Either::<i32, &str>::right("kept")), Either::right("kept"));
    assert_eq!(double(Maybe::of(4)), Maybe::of(8));
    assert_eq!(double(Maybe::<i32>::empty()), Maybe::empty());
    assert_eq!(double(Fallible::<i32, ()>::succeeded(5)), Fallible::succeeded(10));
    assert_eq!(double(Some(1)), Some(2));
    assert_eq!(double(Ok::<i32, ()>(3)), Ok(6));
}

#[rstest]
fn pure_lifts_into_primary_channel() {
    let describe = |number: i32| format!("#{number}");

    assert_eq!(<Either<(), &str>>::pure(1).fmap(describe), Either::new("#1".to_string()));
    assert_eq!(<Maybe<()>>::pure(2).fmap(describe), Maybe::of("#2".to_string()));
    assert_eq!(<Fallible<(), ()>>::pure(3).fmap(describe), Fallible::succeeded("#3".to_string()));
    assert_eq!(<Option<()>>::pure(4).fmap(describe), Some("#4".to_string()));
}

#[rstest]
fn then_propagates_failure() {
    let failed = Fallible::<i32, &str>::failed("first");
    assert_eq!(failed.then(Fallible::succeeded("second")), Fallible::failed("first"));

    let absent: Maybe<i32> = Maybe::empty();
    assert_eq!(absent.then(Maybe::of("next")), Maybe::empty());

    let right: Either<i32, &str> = Either::right("stop");
    assert_eq!(right.then(Either::new(1)), Either::right("stop"));
}

#[rstest]
fn void_and_replace_keep_the_channel() {
    assert_eq!(Either::<i32, &str>::new(3).void(), Either::new(()));
    assert_eq!(Maybe::of(3).replace("three"), Maybe::of("three"));
    assert!(Fallible::<i32, &str>::failed("bad").void().is_exception());
}
