use crate::core::adj::Neighbour;

/// A message on its way to `target`, tagged with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope<M> {
    pub source: usize,
    pub source_partition: usize,
    pub target: usize,
    pub message: M,
}

/// What a vertex program sees while computing one vertex in one superstep.
pub struct EvalVertexView<'a, S, M> {
    pub(crate) ss: usize,
    pub(crate) vertex: usize,
    pub(crate) partition: usize,
    pub(crate) state: &'a mut S,
    pub(crate) messages: &'a [M],
    pub(crate) out_neighbours: &'a [Neighbour],
    pub(crate) outbox: &'a mut Vec<Envelope<M>>,
    pub(crate) max_delta: &'a mut f64,
}

impl<'a, S, M> EvalVertexView<'a, S, M> {
    pub fn superstep(&self) -> usize {
        self.ss
    }

    pub fn index(&self) -> usize {
        self.vertex
    }

    pub fn get(&self) -> &S {
        self.state
    }

    pub fn get_mut(&mut self) -> &mut S {
        self.state
    }

    /// Messages delivered to this vertex at the end of the previous superstep.
    pub fn messages(&self) -> &[M] {
        self.messages
    }

    pub fn out_degree(&self) -> usize {
        self.out_neighbours.len()
    }

    pub fn out_neighbours(&self) -> impl Iterator<Item = usize> + '_ {
        self.out_neighbours.iter().map(|n| n.node)
    }

    pub fn send(&mut self, target: usize, message: M) {
        self.outbox.push(Envelope {
            source: self.vertex,
            source_partition: self.partition,
            target,
            message,
        });
    }

    /// Sends one copy of `message` along every out-link, in link order.
    pub fn send_to_neighbours(&mut self, message: M)
    where
        M: Clone,
    {
        let targets: Vec<usize> = self.out_neighbours.iter().map(|n| n.node).collect();
        for target in targets {
            self.send(target, message.clone());
        }
    }

    /// Feeds the superstep's max-|Δ| aggregate; reporting only, never a halting signal.
    pub fn report_delta(&mut self, delta: f64) {
        if delta > *self.max_delta {
            *self.max_delta = delta;
        }
    }
}
