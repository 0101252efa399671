use anyhow::Result;

use weekgoals_core::goals::CreateGoalForm;

use crate::state::AppState;

pub async fn run(
    state: &AppState,
    title: &str,
    description: Option<&str>,
    frequency: Option<&str>,
) -> Result<()> {
    let mut form = CreateGoalForm::new();
    form.set_title(title);
    if let Some(description) = description {
        form.set_description(description);
    }
    if let Some(frequency) = frequency {
        form.set_frequency(frequency);
    }

    if form.submit(state.goal_service.as_ref()).await {
        return Ok(());
    }

    // Validation failures print inline per field; a submission failure was
    // already toasted by the notification sink.
    for error in form.errors() {
        eprintln!("{}: {}", error.field, error.message);
    }
    anyhow::bail!("meta não criada")
}
