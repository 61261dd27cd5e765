//! When steps for command dispatch BDD scenarios.

use super::world::DispatchWorld;
use darebot::command::domain::Command;
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn command(user: &str, name: &str) -> eyre::Result<Command> {
    Command::new(name, user).wrap_err("build scenario command")
}

#[when(r#"user "{user}" sends "{name}""#)]
fn user_sends(world: &mut DispatchWorld, user: String, name: String) -> Result<(), eyre::Report> {
    world.dispatch(command(&user, &name)?)
}

#[when(r#"user "{user}" requests "{name}" with theme "{theme}""#)]
fn user_requests_with_theme(
    world: &mut DispatchWorld,
    user: String,
    name: String,
    theme: String,
) -> Result<(), eyre::Report> {
    world.dispatch(command(&user, &name)?.with_metadata("theme", theme))
}

#[when(r#"user "{user}" targets dare {id:u64} with "{name}""#)]
fn user_targets_dare(
    world: &mut DispatchWorld,
    user: String,
    id: u64,
    name: String,
) -> Result<(), eyre::Report> {
    world.dispatch(command(&user, &name)?.with_metadata("dare_id", id))
}

#[when(r#"user "{user}" repeats "{name}" {times:u32} times"#)]
fn user_repeats(
    world: &mut DispatchWorld,
    user: String,
    name: String,
    times: u32,
) -> Result<(), eyre::Report> {
    for _ in 0..times {
        world.dispatch(command(&user, &name)?)?;
    }
    Ok(())
}
