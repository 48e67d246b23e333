//! Property-based tests for the automaton model.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use automa::{Automaton, Event, Label, State, StepOutcome, Transition};
use proptest::prelude::*;
use std::collections::HashSet;

fn labels() -> (Label, Label) {
    (Label::observability("o"), Label::relevance("r"))
}

prop_compose! {
    fn arbitrary_event()(id in 0..50u32, name in "[a-z]{1,8}") -> Event {
        Event::create(id, name)
    }
}

/// An automaton with `fan_out` transitions from A on the same input
/// event, each targeting A or B; B carries a return edge so the graph is
/// connected and every state has an outgoing transition.
fn fan_out_automaton(fan_out: usize, to_b: &[bool]) -> (Automaton, Event) {
    let a = State::create(0, "A");
    let b = State::create(1, "B");
    let e1 = Event::create(1, "e1");
    let (oss, ril) = labels();

    let mut transitions = Vec::with_capacity(fan_out + 1);
    for i in 0..fan_out {
        let target = if to_b[i] { b.clone() } else { a.clone() };
        transitions.push(Transition::create(
            format!("t{i}"),
            a.clone(),
            target,
            Some(e1.clone()),
            vec![],
            oss.clone(),
            ril.clone(),
        ));
    }
    transitions.push(Transition::create(
        "back",
        b.clone(),
        a.clone(),
        None,
        vec![],
        oss,
        ril,
    ));

    let automaton =
        Automaton::create(1, "fan", vec![a.clone(), b], transitions, a).unwrap();
    (automaton, e1)
}

proptest! {
    #[test]
    fn event_equality_is_by_id(id in any::<u32>(), name_a in "[a-z]{1,8}", name_b in "[a-z]{1,8}") {
        let a = Event::create(id, name_a);
        let b = Event::create(id, name_b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn state_equality_is_by_id(id_a in 0..100u32, id_b in 0..100u32, name in "[a-z]{1,8}") {
        let a = State::create(id_a, name.clone());
        let b = State::create(id_b, name);
        prop_assert_eq!(a == b, id_a == id_b);
    }

    #[test]
    fn output_sequence_never_holds_duplicates(
        events in prop::collection::vec(arbitrary_event(), 0..20)
    ) {
        let (oss, ril) = labels();
        let mut transition = Transition::create(
            "t1",
            State::create(0, "A"),
            State::create(1, "B"),
            None,
            vec![],
            oss,
            ril,
        );

        for event in &events {
            transition.add_output_event(event.clone());
        }

        let ids: Vec<u32> = transition.outputs().iter().map(Event::id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());

        // First-occurrence order is preserved.
        let mut seen = HashSet::new();
        let expected: Vec<u32> = events
            .iter()
            .map(Event::id)
            .filter(|id| seen.insert(*id))
            .collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn branch_set_is_complete(fan_out in 2..8usize, seed in any::<u64>()) {
        let to_b: Vec<bool> = (0..fan_out).map(|i| (seed >> i) & 1 == 1).collect();
        let (mut automaton, e1) = fan_out_automaton(fan_out, &to_b);
        let available: HashSet<Event> = [e1].into_iter().collect();

        let outcome = automaton.step(&available).unwrap();
        let branches = match outcome {
            StepOutcome::Branches(branches) => branches,
            other => panic!("expected Branches, got {other:?}"),
        };

        // One branch per enabled transition, in declaration order.
        prop_assert_eq!(branches.len(), fan_out);
        for (i, branch) in branches.iter().enumerate() {
            prop_assert_eq!(&branch.transition, &format!("t{i}"));
            let expected = if to_b[i] { 1 } else { 0 };
            prop_assert_eq!(branch.state.id(), expected);
        }

        // Producing branches never moves the cursor.
        prop_assert_eq!(automaton.current_state().id(), 0);
    }

    #[test]
    fn blocked_when_input_unavailable(fan_out in 1..8usize, seed in any::<u64>()) {
        let to_b: Vec<bool> = (0..fan_out).map(|i| (seed >> i) & 1 == 1).collect();
        let (mut automaton, _e1) = fan_out_automaton(fan_out, &to_b);

        // e1 is the only trigger out of A; an unrelated event enables nothing.
        let available: HashSet<Event> = [Event::create(99, "other")].into_iter().collect();
        let outcome = automaton.step(&available).unwrap();

        prop_assert_eq!(outcome, StepOutcome::Blocked);
        prop_assert_eq!(automaton.current_state().id(), 0);
    }

    #[test]
    fn single_match_step_is_deterministic(to_b in any::<bool>()) {
        let (mut first, e1) = fan_out_automaton(1, &[to_b]);
        let (mut second, _) = fan_out_automaton(1, &[to_b]);
        let available: HashSet<Event> = [e1].into_iter().collect();

        let a = first.step(&available).unwrap();
        let b = second.step(&available).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn round_trip_preserves_sets(state_count in 1..10u32) {
        let (oss, ril) = labels();
        let states: Vec<State> = (0..state_count)
            .map(|i| State::create(i, format!("s{i}")))
            .collect();
        // Ring topology: every state has an outgoing edge and the graph
        // is connected.
        let transitions: Vec<Transition> = (0..state_count)
            .map(|i| {
                Transition::create(
                    format!("t{i}"),
                    states[i as usize].clone(),
                    states[((i + 1) % state_count) as usize].clone(),
                    None,
                    vec![],
                    oss.clone(),
                    ril.clone(),
                )
            })
            .collect();

        let automaton = Automaton::create(
            1,
            "ring",
            states.clone(),
            transitions.clone(),
            states[0].clone(),
        )
        .unwrap();

        for s in &states {
            prop_assert!(automaton.states().contains(s));
        }
        for t in &transitions {
            prop_assert!(automaton.transitions().contains(t));
        }
        prop_assert_eq!(automaton.states().len(), states.len());
        prop_assert_eq!(automaton.transitions().len(), transitions.len());
    }

    #[test]
    fn duplicate_state_ids_always_rejected(id in 0..20u32) {
        let (oss, ril) = labels();
        let a = State::create(id, "A");
        let dup = State::create(id, "A_dup");
        let t = Transition::create("t1", a.clone(), a.clone(), None, vec![], oss, ril);

        let result = Automaton::create(1, "dup", vec![a.clone(), dup], vec![t], a);
        prop_assert!(matches!(
            result,
            Err(automa::ValidationError::DuplicateState(_))
        ));
    }
}
