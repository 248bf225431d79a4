use crate::{Shallow, ShouldRecompute};
use core::{convert::Infallible, fmt};

/// Create a new [`MemoGate`] for `compute`, using the [`Shallow`] policy.
///
/// ```
/// use memogate::prelude::*;
///
/// #[derive(Record)]
/// struct Input {
///     counter: i32,
/// }
///
/// let mut gate = memo(|input: &Input| input.counter * 2);
/// assert_eq!(*gate.invoke(Input { counter: 1 }), 2);
/// assert_eq!(*gate.invoke(Input { counter: 1 }), 2);
/// assert_eq!(*gate.invoke(Input { counter: 2 }), 4);
/// ```
pub fn memo<R, T, F>(compute: F) -> MemoGate<R, T, F>
where
    F: FnMut(&R) -> T,
{
    MemoGate::new(compute)
}

/// Create a new [`MemoGate`] for the fallible `compute`, using the [`Shallow`] policy.
///
/// Use [`MemoGate::try_invoke`] to run it.
pub fn try_memo<R, T, E, F>(compute: F) -> MemoGate<R, T, F>
where
    F: FnMut(&R) -> Result<T, E>,
{
    MemoGate::new(compute)
}

/// Create a new [`MemoGate`] for `compute` with a custom recompute `policy`.
pub fn memo_with<R, T, F, P>(compute: F, policy: P) -> MemoGate<R, T, F, P>
where
    F: FnMut(&R) -> T,
    P: ShouldRecompute<R>,
{
    MemoGate::with_policy(compute, policy)
}

/// Memoized computation of a single input.
///
/// A `MemoGate` remembers exactly one input and the output computed from it.
/// Each [`invoke`](MemoGate::invoke) asks the policy whether the new input differs from the
/// remembered one: if it doesn't, the remembered output is returned and `compute` is not called.
///
/// `compute` is expected to be pure.
/// Any side effects it has are skipped along with it whenever the input is unchanged.
///
/// `invoke` takes `&mut self`, so sharing a gate across threads requires external locking.
pub struct MemoGate<R, T, F, P = Shallow> {
    compute: F,
    policy: P,
    last: Option<(R, T)>,
}

impl<R, T, F> MemoGate<R, T, F> {
    /// Create a new [`MemoGate`] for `compute`, using the [`Shallow`] policy.
    pub fn new(compute: F) -> Self {
        Self::with_policy(compute, Shallow)
    }
}

impl<R, T, F, P> MemoGate<R, T, F, P> {
    /// Create a new [`MemoGate`] for `compute` with a custom recompute `policy`.
    pub fn with_policy(compute: F, policy: P) -> Self {
        Self {
            compute,
            policy,
            last: None,
        }
    }

    /// Get the output for `input`, computing it only if the policy reports a change.
    pub fn invoke(&mut self, input: R) -> &T
    where
        F: FnMut(&R) -> T,
        P: ShouldRecompute<R>,
    {
        match self.run(input, |compute, input| Ok::<_, Infallible>(compute(input))) {
            Ok(output) => output,
            Err(never) => match never {},
        }
    }

    /// Get the output for `input` from a fallible `compute`.
    ///
    /// Errors are returned unchanged and are not memoized:
    /// the last successful input and output are kept, and the next call computes again.
    pub fn try_invoke<E>(&mut self, input: R) -> Result<&T, E>
    where
        F: FnMut(&R) -> Result<T, E>,
        P: ShouldRecompute<R>,
    {
        self.run(input, |compute, input| compute(input))
    }

    /// Returns `true` if `input` would be served from the remembered output.
    pub fn is_cached(&self, input: &R) -> bool
    where
        P: ShouldRecompute<R>,
    {
        self.last
            .as_ref()
            .is_some_and(|(last, _)| !self.policy.should_recompute(last, input))
    }

    /// Get the remembered input.
    pub fn last_input(&self) -> Option<&R> {
        self.last.as_ref().map(|(input, _)| input)
    }

    /// Get the remembered output.
    pub fn last_output(&self) -> Option<&T> {
        self.last.as_ref().map(|(_, output)| output)
    }

    /// Forget the remembered input and output, so the next call always computes.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Get the recompute policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn run<E>(&mut self, input: R, f: impl FnOnce(&mut F, &R) -> Result<T, E>) -> Result<&T, E>
    where
        P: ShouldRecompute<R>,
    {
        let is_hit = self
            .last
            .as_ref()
            .is_some_and(|(last, _)| !self.policy.should_recompute(last, &input));

        let (_, output) = match self.last.take() {
            Some(last) if is_hit => {
                #[cfg(feature = "tracing")]
                tracing::trace!("Skip: {}", crate::name::<R>());

                self.last.insert(last)
            }
            previous => {
                #[cfg(feature = "tracing")]
                tracing::trace!("Compute: {}", crate::name::<R>());

                // The last input and output stay in place until `f` succeeds.
                self.last = previous;

                let output = match f(&mut self.compute, &input) {
                    Ok(output) => output,
                    Err(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::trace!("Compute failed: {}", crate::name::<R>());

                        return Err(error);
                    }
                };

                self.last.insert((input, output))
            }
        };

        Ok(&*output)
    }
}

impl<R: fmt::Debug, T: fmt::Debug, F, P: fmt::Debug> fmt::Debug for MemoGate<R, T, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MemoGate")
            .field("policy", &self.policy)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
