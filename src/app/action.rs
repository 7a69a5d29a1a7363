use crate::quiz::FetchRequest;

/// Side effects requested by the handler, executed by the runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchCategories { generation: u64 },
    FetchQuestions { generation: u64, category: u32, amount: u8 },
    Quit,
}

impl From<FetchRequest> for Action {
    fn from(request: FetchRequest) -> Self {
        match request {
            FetchRequest::Categories { generation } => Action::FetchCategories { generation },
            FetchRequest::Questions {
                generation,
                category,
                amount,
            } => Action::FetchQuestions {
                generation,
                category,
                amount,
            },
        }
    }
}
