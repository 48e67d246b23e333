//! Demonstrates branch-exposing execution on a non-deterministic
//! automaton: two transitions enabled by the same event, explored on
//! independent clones before one branch is committed.
//!
//! Run with: cargo run --example branching

use automa::{AutomatonBuilder, Event, Label, State, StepOutcome, TransitionBuilder};
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let idle = State::create(0, "Idle");
    let active = State::create(1, "Active");
    let trigger = Event::create(1, "trigger");
    let notify = Event::create(2, "notify");

    let mut automaton = AutomatonBuilder::new(1, "dispatcher")
        .states(vec![idle.clone(), active.clone()])
        .transition(
            TransitionBuilder::new()
                .id("t_start")
                .from(idle.clone())
                .to(active.clone())
                .on(trigger.clone())
                .emit(notify.clone())
                .observability(Label::observability("visible"))
                .relevance(Label::relevance("high")),
        )?
        .transition(
            TransitionBuilder::new()
                .id("t_ignore")
                .from(idle.clone())
                .to(idle.clone())
                .on(trigger.clone())
                .observability(Label::observability("silent"))
                .relevance(Label::relevance("low")),
        )?
        .transition(
            TransitionBuilder::new()
                .id("t_reset")
                .from(active.clone())
                .to(idle.clone())
                .observability(Label::observability("visible"))
                .relevance(Label::relevance("low")),
        )?
        .initial(idle)
        .build()?;

    println!("automaton `{}`:", automaton.name());
    for transition in automaton.transitions() {
        println!("  {transition}");
    }

    let available: HashSet<Event> = [trigger].into_iter().collect();
    match automaton.step(&available)? {
        StepOutcome::Branches(branches) => {
            println!("\n{} transitions enabled from `Idle`:", branches.len());
            for branch in &branches {
                println!("  {} -> {}", branch.transition, branch.state);
            }

            // Explore each branch on its own clone, then commit one.
            for branch in &branches {
                let mut probe = automaton.clone();
                probe.commit(branch)?;
                println!("probe after {}: {}", branch.transition, probe.current_state());
            }
            automaton.commit(&branches[0])?;
        }
        other => println!("unexpected outcome: {other:?}"),
    }

    println!("\ncommitted state: {}", automaton.current_state());
    println!("trace steps: {}", automaton.trace().steps().len());
    Ok(())
}
