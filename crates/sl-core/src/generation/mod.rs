mod response;

pub use response::{
    Candidate, Content, GenerationResponse, InlineImageData, PartsAvailability, ResponsePart,
};
