use anyhow::Result;

use crate::state::AppState;

pub async fn list(state: &AppState) -> Result<()> {
    let pending = state.pending_goals_service.get_pending_goals().await?;

    if pending.is_empty() {
        println!("Você ainda não cadastrou nenhuma meta.");
        return Ok(());
    }

    for goal in pending {
        println!(
            "{}: {}/{} nesta semana",
            goal.title, goal.completion_count, goal.desired_weekly_frequency
        );
    }
    Ok(())
}
