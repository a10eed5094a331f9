/// Generation number captured by one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Per-controller generation counter. Only the latest ticket may render.
#[derive(Debug, Default)]
pub struct Submissions {
    latest: u64,
}

impl Submissions {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
