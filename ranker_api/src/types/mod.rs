mod candidate;
pub use self::candidate::{Candidate, CandidateID};

mod rank;
pub use self::rank::{RankRequest, RankResponse};

mod assessment;
pub use self::assessment::{AiScoreRequest, AiScoreResponse};
