//! Render gate - decides per frame whether to step and draw.
//!
//! Pure function of the view and dice state, kept apart from the step itself.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateInputs {
    pub visible: bool,
    pub force_render: bool,
    pub interacting: bool,
    /// At least one die is not asleep
    pub any_awake: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Tray not shown: no physics, no render
    SkipHidden,
    /// Shown but nothing moves and no override is active
    SkipIdle,
    Step,
}

impl GateDecision {
    pub fn should_step(self) -> bool {
        self == GateDecision::Step
    }
}

pub fn decide(inputs: GateInputs) -> GateDecision {
    if !inputs.visible {
        GateDecision::SkipHidden
    } else if inputs.force_render || inputs.interacting || inputs.any_awake {
        GateDecision::Step
    } else {
        GateDecision::SkipIdle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_always_skips() {
        for bits in 0..8u8 {
            let inputs = GateInputs {
                visible: false,
                force_render: bits & 1 != 0,
                interacting: bits & 2 != 0,
                any_awake: bits & 4 != 0,
            };
            assert_eq!(decide(inputs), GateDecision::SkipHidden);
        }
    }

    #[test]
    fn any_reason_to_draw_steps() {
        let base = GateInputs { visible: true, ..GateInputs::default() };
        assert_eq!(decide(base), GateDecision::SkipIdle);
        assert!(decide(GateInputs { force_render: true, ..base }).should_step());
        assert!(decide(GateInputs { interacting: true, ..base }).should_step());
        assert!(decide(GateInputs { any_awake: true, ..base }).should_step());
    }
}
