use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET for a page of results and report back with `request_id`.
    FetchPage { request_id: RequestId, url: String },
}
