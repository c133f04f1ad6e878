mod error;
mod input;
mod person;
mod random;

use sequence::Sequence;
use tracing::{debug, warn};

pub use error::FactoryError;
pub use input::{ConsoleInput, InputSource, ScriptedInput};
pub use person::{AGE_PROMPT, NAME_PROMPT, Person, PersonFactory};
pub use random::{RANGE_END, RANGE_START, RandomNumberFactory};

/// Produces one new value per call.
pub trait Factory {
    type Output;
    type Error;

    fn create(&mut self) -> Result<Self::Output, Self::Error>;
}

impl<F: Factory + ?Sized> Factory for &mut F {
    type Output = F::Output;
    type Error = F::Error;

    fn create(&mut self) -> Result<Self::Output, Self::Error> {
        (**self).create()
    }
}

/// Calls `create` exactly `n` times, in order.
///
/// The first failure is returned and everything created before it is
/// dropped.
pub fn create_array<F: Factory + ?Sized>(
    factory: &mut F,
    n: usize,
) -> Result<Vec<F::Output>, F::Error> {
    let mut items = Vec::with_capacity(n);
    fill(factory, n, |item| items.push(item))?;
    Ok(items)
}

/// Like [`create_array`], collecting into any [`Sequence`].
pub fn create_sequence<S, F>(factory: &mut F, n: usize) -> Result<S, F::Error>
where
    S: Sequence<Item = F::Output> + Default,
    F: Factory + ?Sized,
{
    let mut seq = S::default();
    fill(factory, n, |item| seq.add(item))?;
    Ok(seq)
}

fn fill<F, P>(factory: &mut F, n: usize, mut push: P) -> Result<(), F::Error>
where
    F: Factory + ?Sized,
    P: FnMut(F::Output),
{
    debug!(count = n, "creating batch");
    for index in 0..n {
        match factory.create() {
            Ok(item) => push(item),
            Err(err) => {
                warn!(index, count = n, "factory failed, batch discarded");
                return Err(err);
            }
        }
    }
    debug!(count = n, "batch created");
    Ok(())
}
