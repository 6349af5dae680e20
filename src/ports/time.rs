use std::time::Duration;

pub trait TimeProvider: Clone + 'static {
    type Sleep<'a>: Future<Output = ()> + 'a
    where
        Self: 'a;

    fn sleep(&self, duration: Duration) -> Self::Sleep<'_>;
}
