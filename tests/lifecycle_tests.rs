// Host-side tests for loop bookkeeping and ordered teardown.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::{attempt_all, create_or_unwind, LoopRegistry, LoopSlot, Teardown};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn slot_tracks_the_pending_callback() {
    let mut slot = LoopSlot::default();
    assert!(!slot.is_pending());
    assert!(slot.schedule(7));
    assert!(slot.is_pending());
    assert!(slot.fired());
    assert_eq!(slot, LoopSlot::Idle);
    assert!(slot.schedule(8));
    assert_eq!(slot.cancel(), Some(8));
    assert!(slot.is_cancelled());
}

#[test]
fn cancelled_slot_never_reschedules() {
    let mut slot = LoopSlot::default();
    slot.schedule(1);
    slot.cancel();
    // a tick that was already running when cancel happened
    assert!(!slot.fired());
    assert!(!slot.schedule(2));
    assert!(!slot.is_pending());
    assert_eq!(slot.cancel(), None);
}

#[test]
fn mount_then_immediate_unmount_leaves_nothing_pending() {
    let mut loops = LoopRegistry::new();
    let terminal = loops.register("terminal");
    let particles = loops.register("particles");
    let render = loops.register("render");
    terminal.borrow_mut().schedule(11);
    particles.borrow_mut().schedule(12);
    // render loop not started yet: GPU still initializing
    assert_eq!(loops.pending_count(), 2);

    let ids = loops.cancel_all();
    assert_eq!(ids, vec![11, 12]);
    assert_eq!(loops.pending_count(), 0);

    // the GPU finishes later and tries to start its loop
    assert!(!render.borrow_mut().schedule(13));
    assert_eq!(loops.pending_count(), 0);
    assert!(loops.cancel_all().is_empty());
    assert_eq!(loops.len(), 3);
}

#[test]
fn teardown_runs_in_order_and_survives_failures() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut td = Teardown::new();
    for name in ["loops", "listeners", "audio", "gpu", "canvases"] {
        let log = log.clone();
        td.push(name, move || {
            log.borrow_mut().push(name);
            if name == "audio" {
                anyhow::bail!("already disconnected");
            }
            Ok(())
        });
    }
    let failed = td.run();
    assert_eq!(failed, vec!["audio"]);
    assert_eq!(
        *log.borrow(),
        vec!["loops", "listeners", "audio", "gpu", "canvases"]
    );
    assert!(td.is_done());
}

#[test]
fn second_teardown_is_a_no_op() {
    let count = Rc::new(RefCell::new(0));
    let mut td = Teardown::new();
    {
        let count = count.clone();
        td.push("count", move || {
            *count.borrow_mut() += 1;
            Ok(())
        });
    }
    assert!(td.run().is_empty());
    assert!(td.run().is_empty());
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn empty_teardown_completes() {
    let mut td = Teardown::new();
    assert!(!td.is_done());
    assert!(td.run().is_empty());
    assert!(td.is_done());
}

#[test]
fn failed_creation_unwinds_what_was_made() {
    let undone = RefCell::new(Vec::new());
    let result = create_or_unwind(
        ["gpu", "terminal", "particles"],
        |name| if name == "particles" { Err("no canvas") } else { Ok(name) },
        |name| undone.borrow_mut().push(*name),
    );
    assert_eq!(result, Err("no canvas"));
    assert_eq!(*undone.borrow(), vec!["terminal", "gpu"]);
}

#[test]
fn successful_creation_undoes_nothing() {
    let mut undone = 0;
    let made = create_or_unwind([1, 2, 3], |n| Ok::<_, ()>(n * 10), |_| undone += 1);
    assert_eq!(made, Ok(vec![10, 20, 30]));
    assert_eq!(undone, 0);
}

#[test]
fn cancelling_keeps_going_after_a_failure() {
    let mut seen = Vec::new();
    let result = attempt_all(&[3, 4, 5], |id| {
        seen.push(id);
        if id == 4 {
            anyhow::bail!("stale handle");
        }
        Ok(())
    });
    assert_eq!(seen, vec![3, 4, 5]);
    let msg = format!("{:#}", result.unwrap_err());
    assert!(msg.contains("1 failed"), "{msg}");
    assert!(msg.contains("4: stale handle"), "{msg}");
    assert!(attempt_all(&[1, 2], |_| Ok(())).is_ok());
}
