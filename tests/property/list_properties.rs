//! Property-based tests for the task list.
//!
//! Uses proptest to verify:
//! 1. Adding distinct titles yields one open task per title, in order.
//! 2. Re-adding any existing title never grows the list.
//! 3. Toggling twice is the identity; toggling once touches one task.
//! 4. Rename changes exactly one title and nothing else.
//! 5. Confirmed removal drops exactly one task and keeps the rest in order;
//!    declined removal changes nothing.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use taskpad_core::{Confirmation, IdStrategy, Task, TaskList};

/// Strategy for a set of distinct, non-empty titles.
fn arb_titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-zA-Z0-9 ]{1,16}", 1..20)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

/// Strategy for a list of titles plus an index into it.
fn arb_titles_and_index() -> impl Strategy<Value = (Vec<String>, usize)> {
    arb_titles().prop_flat_map(|titles| {
        let len = titles.len();
        (Just(titles), 0..len)
    })
}

fn build(titles: &[String]) -> TaskList {
    let mut list = TaskList::new(IdStrategy::Sequential);
    for title in titles {
        list.add(title).unwrap();
    }
    list
}

proptest! {
    #[test]
    fn distinct_adds_are_all_kept(titles in arb_titles()) {
        let list = build(&titles);
        prop_assert_eq!(list.len(), titles.len());
        prop_assert!(list.tasks().iter().all(|t| !t.done));
        let stored: Vec<&String> = list.tasks().iter().map(|t| &t.title).collect();
        let expected: Vec<&String> = titles.iter().collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn duplicate_add_never_grows((titles, idx) in arb_titles_and_index()) {
        let mut list = build(&titles);
        let before: Vec<Task> = list.tasks().to_vec();
        prop_assert!(list.add(&titles[idx]).is_err());
        prop_assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn toggle_touches_one_task((titles, idx) in arb_titles_and_index()) {
        let mut list = build(&titles);
        let before: Vec<Task> = list.tasks().to_vec();
        let target = before[idx].id;

        list.toggle_done(target);
        for (old, new) in before.iter().zip(list.tasks()) {
            if old.id == target {
                prop_assert_eq!(new.done, !old.done);
                prop_assert_eq!(&new.title, &old.title);
            } else {
                prop_assert_eq!(new, old);
            }
        }

        list.toggle_done(target);
        prop_assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn rename_touches_one_title(
        (titles, idx) in arb_titles_and_index(),
        new_title in "[a-z]{0,12}",
    ) {
        let mut list = build(&titles);
        let before: Vec<Task> = list.tasks().to_vec();
        let target = before[idx].id;

        prop_assert!(list.rename(target, &new_title));
        prop_assert_eq!(list.len(), before.len());
        for (old, new) in before.iter().zip(list.tasks()) {
            prop_assert_eq!(new.id, old.id);
            prop_assert_eq!(new.done, old.done);
            if old.id == target {
                prop_assert_eq!(&new.title, &new_title);
            } else {
                prop_assert_eq!(&new.title, &old.title);
            }
        }
    }

    #[test]
    fn removal_respects_the_answer((titles, idx) in arb_titles_and_index(), confirm in any::<bool>()) {
        let mut list = build(&titles);
        let before: Vec<Task> = list.tasks().to_vec();
        let target = before[idx].id;
        let pending = list.request_removal(target).unwrap();

        let answer = if confirm { Confirmation::Yes } else { Confirmation::No };
        let removed = list.resolve_removal(pending, answer);

        if confirm {
            prop_assert_eq!(removed.as_ref(), Some(&before[idx]));
            let expected: Vec<Task> = before
                .iter()
                .filter(|t| t.id != target)
                .cloned()
                .collect();
            prop_assert_eq!(list.tasks(), expected.as_slice());
        } else {
            prop_assert!(removed.is_none());
            prop_assert_eq!(list.tasks(), before.as_slice());
        }
    }
}
