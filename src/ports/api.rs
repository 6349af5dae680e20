use crate::error::ApiError;
use crate::types::activity::ActivityCatalog;
use crate::types::reply::ApiReply;

/// The remote activities service. Futures are not `Send`: the browser's fetch
/// futures live on a single thread.
pub trait ActivityApi {
    type ListFut<'a>: Future<Output = Result<ActivityCatalog, ApiError>> + 'a
    where
        Self: 'a;
    type ReplyFut<'a>: Future<Output = Result<ApiReply, ApiError>> + 'a
    where
        Self: 'a;

    fn list_activities(&self) -> Self::ListFut<'_>;

    /// Non-success statuses with a JSON body are `Ok` replies, not errors.
    fn sign_up<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::ReplyFut<'a>;

    fn remove_participant<'a>(&'a self, activity: &'a str, email: &'a str) -> Self::ReplyFut<'a>;
}
