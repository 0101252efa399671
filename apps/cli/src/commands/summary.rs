use anyhow::Result;

use weekgoals_core::summary::{SummaryView, SummaryViewState};

use crate::state::AppState;

pub async fn show(state: &AppState) -> Result<()> {
    let mut view = SummaryView::new();
    render(view.state());

    view.load(state.summary_service.as_ref()).await;
    render(view.state());

    if matches!(view.state(), SummaryViewState::Errored(_)) {
        anyhow::bail!("não foi possível carregar o resumo");
    }
    Ok(())
}

fn render(state: &SummaryViewState) {
    match state {
        SummaryViewState::Loading => println!("Carregando resumo..."),
        SummaryViewState::Loaded(summary) => {
            println!(
                "Metas da semana: {} de {} concluídas",
                summary.completed, summary.total
            );
            if let Some(goals_per_day) = &summary.goals_per_day {
                let mut days: Vec<_> = goals_per_day.iter().collect();
                days.sort();
                for (day, count) in days {
                    println!("  {day}: {count}");
                }
            }
        }
        SummaryViewState::Errored(message) => {
            eprintln!("Erro ao carregar o resumo: {message}");
        }
    }
}
