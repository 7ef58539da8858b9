// the main execution unit of a vertex program
use super::eval_vertex::EvalVertexView;
use std::marker::PhantomData;

pub trait Task<S, M>: Send + Sync {
    fn run(&self, vv: &mut EvalVertexView<'_, S, M>) -> Step;
}

/// `Done` votes to halt; a halted vertex only runs again when it receives a message.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    Done,
    Continue,
}

pub struct ATask<S, M, F> {
    f: F,
    _s: PhantomData<fn() -> (S, M)>,
}

impl<S, M, F> ATask<S, M, F>
where
    F: Fn(&mut EvalVertexView<'_, S, M>) -> Step + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f, _s: PhantomData }
    }
}

impl<S, M, F> Task<S, M> for ATask<S, M, F>
where
    F: Fn(&mut EvalVertexView<'_, S, M>) -> Step + Send + Sync,
{
    fn run(&self, vv: &mut EvalVertexView<'_, S, M>) -> Step {
        (self.f)(vv)
    }
}
