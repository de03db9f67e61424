//! Scoped release of statement and cursor handles.
//!
//! # Responsibility
//! - Release every acquired handle on all exit paths (`Ok`, `?`, panic unwind).
//! - Report close-time errors without letting them replace the caller's result.
//!
//! # Invariants
//! - A handle is released exactly once; the guard gives it up on drop.
//! - A guard acquired later is dropped earlier, so a cursor guard always
//!   releases before the statement guard it borrows from.

use super::store::Release;
use log::warn;
use std::ops::{Deref, DerefMut};

/// Kind of handle held by a guard, used in release diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Statement,
    Cursor,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Statement => "statement",
            Self::Cursor => "cursor",
        }
    }
}

/// Owns one store handle and releases it when dropped.
pub struct Guard<R: Release> {
    kind: ResourceKind,
    resource: Option<R>,
}

impl<R: Release> Guard<R> {
    pub fn new(kind: ResourceKind, resource: R) -> Self {
        Self {
            kind,
            resource: Some(resource),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl<R: Release> Deref for Guard<R> {
    type Target = R;

    fn deref(&self) -> &R {
        match self.resource.as_ref() {
            Some(resource) => resource,
            None => unreachable!("guard handle is only taken while dropping"),
        }
    }
}

impl<R: Release> DerefMut for Guard<R> {
    fn deref_mut(&mut self) -> &mut R {
        match self.resource.as_mut() {
            Some(resource) => resource,
            None => unreachable!("guard handle is only taken while dropping"),
        }
    }
}

impl<R: Release> Drop for Guard<R> {
    fn drop(&mut self) {
        close_quietly(self.kind, self.resource.take());
    }
}

/// Releases `resource` if present, logging instead of returning close errors.
///
/// `None` stands for a handle that was never acquired and is a no-op.
pub fn close_quietly<R: Release>(kind: ResourceKind, resource: Option<R>) {
    let Some(resource) = resource else {
        return;
    };

    if let Err(err) = resource.release() {
        warn!(
            "event=resource_release module=db status=error kind={} error={}",
            kind.as_str(),
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{close_quietly, Guard, ResourceKind};
    use crate::db::store::Release;
    use crate::db::{DbError, DbResult};
    use std::cell::RefCell;

    struct Probe<'log> {
        name: &'static str,
        fail: bool,
        log: &'log RefCell<Vec<&'static str>>,
    }

    impl Release for Probe<'_> {
        fn release(self) -> DbResult<()> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                return Err(DbError::Driver(format!("{} close failed", self.name)));
            }
            Ok(())
        }
    }

    fn probe<'log>(
        name: &'static str,
        fail: bool,
        log: &'log RefCell<Vec<&'static str>>,
    ) -> Probe<'log> {
        Probe { name, fail, log }
    }

    #[test]
    fn guard_releases_once_on_scope_exit() {
        let log = RefCell::new(Vec::new());
        {
            let guard = Guard::new(ResourceKind::Statement, probe("stmt", false, &log));
            assert_eq!(guard.kind(), ResourceKind::Statement);
            assert_eq!(guard.name, "stmt");
        }
        assert_eq!(*log.borrow(), vec!["stmt"]);
    }

    #[test]
    fn guards_release_in_reverse_acquisition_order() {
        let log = RefCell::new(Vec::new());
        {
            let _stmt = Guard::new(ResourceKind::Statement, probe("stmt", false, &log));
            let _cursor = Guard::new(ResourceKind::Cursor, probe("cursor", false, &log));
        }
        assert_eq!(*log.borrow(), vec!["cursor", "stmt"]);
    }

    #[test]
    fn guard_releases_on_early_error_return() {
        let log = RefCell::new(Vec::new());
        let run = || -> DbResult<()> {
            let _stmt = Guard::new(ResourceKind::Statement, probe("stmt", false, &log));
            Err(DbError::Driver("boom".to_string()))
        };

        let err = run().unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(*log.borrow(), vec!["stmt"]);
    }

    #[test]
    fn release_failure_is_swallowed_and_next_handle_still_released() {
        let log = RefCell::new(Vec::new());
        {
            let _stmt = Guard::new(ResourceKind::Statement, probe("stmt", false, &log));
            let _cursor = Guard::new(ResourceKind::Cursor, probe("cursor", true, &log));
        }
        assert_eq!(*log.borrow(), vec!["cursor", "stmt"]);
    }

    #[test]
    fn close_quietly_tolerates_missing_handle() {
        close_quietly::<Probe<'_>>(ResourceKind::Cursor, None);
    }
}
