/// Receives the [`Step`](crate::step::Step)s taken while simplifying fractions, terms and
/// expressions.
///
/// Pass `&mut ()` to discard the steps, or a `&mut Vec<Step>` to record them in order.
/// [`Simplify::simplify_with_steps`](crate::ops::Simplify::simplify_with_steps) does the latter.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Lends a collector to another simplification without giving it up.
impl<S, C: StepCollector<S> + ?Sized> StepCollector<S> for &mut C {
    #[inline]
    fn push(&mut self, step: S) {
        (**self).push(step);
    }
}
