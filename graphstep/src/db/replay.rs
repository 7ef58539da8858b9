use crate::algorithms::algorithm_result::AlgorithmStep;

/// Read-only playback cursor over a finished trace.
///
/// Advancing, rewinding or jumping never involves the engine that produced
/// the steps; a timer driving playback only needs to call
/// [`Replay::step_forward`] until it returns `false`.
#[derive(Clone, Copy, Debug)]
pub struct Replay<'a> {
    steps: &'a [AlgorithmStep],
    position: usize,
}

impl<'a> Replay<'a> {
    pub fn new(steps: &'a [AlgorithmStep]) -> Self {
        Self { steps, position: 0 }
    }

    pub fn current(&self) -> Option<&'a AlgorithmStep> {
        self.steps.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty() || self.position + 1 >= self.steps.len()
    }

    pub fn step_forward(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.position += 1;
        true
    }

    pub fn step_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Out-of-range indexes leave the cursor where it is.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.steps.len() {
            self.position = index;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}
