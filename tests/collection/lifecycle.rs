//! Construction, handle validity and teardown

use crate::common::*;
use seqcheck::{CheckError, CheckResult, Runner, Scenario};

#[test]
fn handle_is_not_null() {
    let fixture = fixture();
    assert!(fixture.handle().is_some());
}

#[test]
fn is_empty_on_create() {
    let fixture = fixture();
    let collection = fixture.collection().unwrap();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}

#[test]
fn handle_valid_after_clear() {
    let mut fixture = fixture_with(10);
    fixture.collection_mut().unwrap().clear();

    assert!(fixture.handle().is_some(), "clear must not release the handle");
    assert!(fixture.collection().unwrap().is_empty());

    fixture.add_entries(1).unwrap();
    assert_eq!(fixture.collection().unwrap().len(), 1);
}

#[test]
fn fixtures_do_not_share_state() {
    let first = fixture_with(7);
    let second = fixture();
    assert_eq!(first.collection().unwrap().len(), 7);
    assert!(second.collection().unwrap().is_empty());
}

#[test]
fn teardown_clears_on_normal_exit() {
    let ((), teardowns) = record_teardowns(|| {
        let _fixture = fixture_with(4);
    });
    assert_eq!(teardowns, vec![Teardown { cleared: 4, remaining: 0 }]);
}

#[test]
fn teardown_runs_when_body_panics() {
    let (result, teardowns) = record_teardowns(|| {
        std::panic::catch_unwind(|| {
            let _fixture = fixture_with(3);
            panic!("scenario body failed");
        })
    });
    assert!(result.is_err());
    assert_eq!(teardowns, vec![Teardown { cleared: 3, remaining: 0 }]);
}

#[test]
fn runner_tears_down_every_scenario() {
    fn fills(fixture: &mut VecFixture) -> CheckResult {
        fixture.add_entries(5)?;
        Ok(())
    }

    fn fails(fixture: &mut VecFixture) -> CheckResult {
        fixture.add_entries(2)?;
        Err(CheckError::Assertion("forced failure".to_string()))
    }

    fn panics(fixture: &mut VecFixture) -> CheckResult {
        fixture.add_entries(6)?;
        panic!("forced panic");
    }

    let scenarios = vec![
        Scenario::positive("fills", "", fills),
        Scenario::positive("fails", "", fails),
        Scenario::positive("panics", "", panics),
    ];
    let (summary, teardowns) = record_teardowns(|| Runner::default().run(&scenarios));

    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
    let cleared: Vec<u64> = teardowns.iter().map(|t| t.cleared).collect();
    assert_eq!(cleared, vec![5, 2, 6]);
    assert!(teardowns.iter().all(|t| t.remaining == 0));
}

#[test]
fn add_entries_rejects_zero() {
    let mut fixture = fixture();
    assert!(fixture.add_entries(0).is_err());
    assert!(fixture.collection().unwrap().is_empty());
}
