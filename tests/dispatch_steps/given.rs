//! Given steps for command dispatch BDD scenarios.

use std::sync::Arc;

use super::world::{DispatchWorld, run_async, scenario_config};
use darebot::{
    bot::BotBuilder,
    dare::{
        adapters::memory::ScriptedContentGenerator,
        domain::{DareSource, Theme},
        services::CreateDareRequest,
    },
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a bot whose generator answers "{content}""#)]
fn bot_with_generator(world: &mut DispatchWorld, content: String) -> Result<(), eyre::Report> {
    let generator = ScriptedContentGenerator::new().then_content(content);
    let bot = BotBuilder::new(scenario_config())
        .with_generator(Arc::new(generator))
        .build()
        .wrap_err("build bot with scripted generator")?;
    world.bot = Some(bot);
    Ok(())
}

#[given("a bot whose generator is down")]
fn bot_with_generator_down(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    let bot = BotBuilder::new(scenario_config())
        .with_generator(Arc::new(ScriptedContentGenerator::new()))
        .build()
        .wrap_err("build offline bot")?;
    world.bot = Some(bot);
    Ok(())
}

#[given(r#"a stored dare "{content}" with theme "{theme}""#)]
fn stored_dare(
    world: &mut DispatchWorld,
    content: String,
    theme: String,
) -> Result<(), eyre::Report> {
    let parsed = Theme::new(theme).wrap_err("scenario theme")?;
    let request = CreateDareRequest::new(content, parsed, DareSource::Manual);
    run_async(world.bot()?.dares().create(request)).wrap_err("seed stored dare")?;
    Ok(())
}
