//! Hooks invoked around statement execution
//!
//! [`StatementInterceptor`] is the original hook set. [`StatementInterceptorV2`] additionally
//! observes how the statement ended. [`V1ToV2Adapter`] lets a v1 implementation run wherever a
//! v2 one is expected.

use auto_impl::auto_impl;

use crate::Opts;
use crate::constant::StatusFlags;
use crate::error::{Error, Result};

/// Original interceptor hooks
///
/// A `Some` result from either hook replaces the result set the statement would produce.
#[auto_impl(&mut, Box)]
pub trait StatementInterceptor {
    type Statement: ?Sized;
    type Connection: ?Sized;
    type ResultSet;

    /// Called once before the interceptor is first used
    fn init(&mut self, conn: &Self::Connection, opts: &Opts);

    fn pre_process(
        &mut self,
        sql: &str,
        stmt: &Self::Statement,
        conn: &Self::Connection,
    ) -> Result<Option<Self::ResultSet>>;

    fn post_process(
        &mut self,
        sql: &str,
        stmt: &Self::Statement,
        original: Option<&Self::ResultSet>,
        conn: &Self::Connection,
    ) -> Result<Option<Self::ResultSet>>;

    /// Skip statements issued by the driver itself or by other interceptors
    fn execute_top_level_only(&self) -> bool;

    /// Called once when the owning connection closes
    fn destroy(&mut self);
}

/// How a statement finished, as reported to [`StatementInterceptorV2::post_process`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionStatus<'a> {
    pub warning_count: u16,
    pub no_index_used: bool,
    pub no_good_index_used: bool,
    /// The error the statement failed with, if it failed
    pub statement_error: Option<&'a Error>,
}

impl<'a> ExecutionStatus<'a> {
    pub fn from_server_status(
        status: StatusFlags,
        warning_count: u16,
        statement_error: Option<&'a Error>,
    ) -> Self {
        Self {
            warning_count,
            no_index_used: status.contains(StatusFlags::SERVER_STATUS_NO_INDEX_USED),
            no_good_index_used: status.contains(StatusFlags::SERVER_STATUS_NO_GOOD_INDEX_USED),
            statement_error,
        }
    }
}

/// Interceptor hooks that also see the execution status
#[auto_impl(&mut, Box)]
pub trait StatementInterceptorV2 {
    type Statement: ?Sized;
    type Connection: ?Sized;
    type ResultSet;

    fn init(&mut self, conn: &Self::Connection, opts: &Opts);

    fn pre_process(
        &mut self,
        sql: &str,
        stmt: &Self::Statement,
        conn: &Self::Connection,
    ) -> Result<Option<Self::ResultSet>>;

    fn post_process(
        &mut self,
        sql: &str,
        stmt: &Self::Statement,
        original: Option<&Self::ResultSet>,
        conn: &Self::Connection,
        status: ExecutionStatus<'_>,
    ) -> Result<Option<Self::ResultSet>>;

    fn execute_top_level_only(&self) -> bool;

    fn destroy(&mut self);
}

/// Runs a [`StatementInterceptor`] as a [`StatementInterceptorV2`]
///
/// Every call is forwarded as-is. The [`ExecutionStatus`] given to `post_process` is dropped.
#[derive(Debug)]
pub struct V1ToV2Adapter<I> {
    inner: I,
}

impl<I: StatementInterceptor> V1ToV2Adapter<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: StatementInterceptor> From<I> for V1ToV2Adapter<I> {
    fn from(inner: I) -> Self {
        Self::new(inner)
    }
}

impl<I: StatementInterceptor> StatementInterceptorV2 for V1ToV2Adapter<I> {
    type Statement = I::Statement;
    type Connection = I::Connection;
    type ResultSet = I::ResultSet;

    fn init(&mut self, conn: &Self::Connection, opts: &Opts) {
        self.inner.init(conn, opts);
    }

    fn pre_process(
        &mut self,
        sql: &str,
        stmt: &Self::Statement,
        conn: &Self::Connection,
    ) -> Result<Option<Self::ResultSet>> {
        self.inner.pre_process(sql, stmt, conn)
    }

    fn post_process(
        &mut self,
        sql: &str,
        stmt: &Self::Statement,
        original: Option<&Self::ResultSet>,
        conn: &Self::Connection,
        status: ExecutionStatus<'_>,
    ) -> Result<Option<Self::ResultSet>> {
        tracing::trace!(?status, "execution status not visible to v1 interceptor");
        self.inner.post_process(sql, stmt, original, conn)
    }

    fn execute_top_level_only(&self) -> bool {
        self.inner.execute_top_level_only()
    }

    fn destroy(&mut self) {
        self.inner.destroy();
    }
}
