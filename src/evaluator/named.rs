//! Named constants such as `pi`.

use crate::operators::constant;

use super::Evaluator;

impl Evaluator<'_> {
    #[expect(
        clippy::unused_self,
        reason = "recognisers share a method shape for the chain"
    )]
    pub(super) fn read_named(&self, src: &str) -> Option<f64> {
        constant(src)
    }
}
