use crate::core::form;
use crate::core::viewport::{self, ViewportSnapshot};
use crate::page::state::PageState;
use crate::runtime::effect::Effect;
use crate::runtime::event::AppEvent;
use crate::runtime::intent::Intent;
use crate::runtime::scheduler::SchedulerCommand;
use std::time::Duration;

const SUCCESS_VISIBLE_FOR: Duration = Duration::from_millis(5000);

const WELCOME_BANNER: [&str; 3] = [
    "¡Bienvenido al portafolio de Yonel Galvis!",
    "Desarrollado con Rust y WebAssembly",
    "Para más información, visita: yonelgalvisnetworket@gmail.com",
];

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut PageState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Initialize {
                snapshot,
                hero_text,
            } => {
                let mut effects: Vec<Effect> = WELCOME_BANNER
                    .iter()
                    .map(|line| Effect::Log((*line).to_string()))
                    .collect();
                effects.extend(scroll_effects(state, &snapshot));

                if state.typewriter_speed().is_some()
                    && let Some(text) = hero_text
                {
                    state.start_typewriter(&text);
                    effects.push(Effect::SetHeroText(String::new()));
                    effects.push(Effect::Schedule(SchedulerCommand::EmitNow(
                        AppEvent::Intent(Intent::TypewriterTick),
                    )));
                }
                effects
            }
            Intent::ToggleMenu => {
                let open = state.nav_mut().toggle();
                vec![Effect::SetMenuOpen(open)]
            }
            Intent::CloseMenu => {
                if state.nav_mut().close() {
                    vec![Effect::SetMenuOpen(false)]
                } else {
                    vec![]
                }
            }
            Intent::NavigateTo { section_id } => vec![Effect::ScrollToSection { section_id }],
            Intent::SubmitForm { input } => {
                let mut effects = vec![Effect::ClearErrors];
                let errors = form::validate(&input);
                if errors.is_empty() {
                    effects.push(Effect::LogSubmission(input));
                    effects.push(Effect::ShowSuccess);
                    effects.push(Effect::ResetForm);
                    effects.push(Effect::Schedule(SchedulerCommand::EmitAfter {
                        delay: SUCCESS_VISIBLE_FOR,
                        event: AppEvent::Intent(Intent::DismissSuccess),
                    }));
                } else {
                    effects.push(Effect::ShowErrors(errors));
                }
                effects
            }
            Intent::UpdateScrollEffects { snapshot } => scroll_effects(state, &snapshot),
            Intent::RevealImage { index } => vec![Effect::FadeInImage(index)],
            Intent::HoverCard { index, raised } => vec![Effect::SetCardHover { index, raised }],
            Intent::DismissSuccess => vec![Effect::RemoveSuccess],
            Intent::TypewriterTick => {
                let Some(speed) = state.typewriter_speed() else {
                    return vec![];
                };
                let Some(prefix) = state.tick_typewriter() else {
                    return vec![];
                };
                let mut effects = vec![Effect::SetHeroText(prefix)];
                if !state.typewriter_done() {
                    effects.push(Effect::Schedule(SchedulerCommand::EmitAfter {
                        delay: speed,
                        event: AppEvent::Intent(Intent::TypewriterTick),
                    }));
                }
                effects
            }
        }
    }
}

fn scroll_effects(state: &mut PageState, snapshot: &ViewportSnapshot) -> Vec<Effect> {
    let entering = viewport::cards_entering(snapshot, state.revealed());
    let mut effects: Vec<Effect> = entering
        .into_iter()
        .map(|index| {
            state.mark_revealed(index);
            Effect::RevealCard(index)
        })
        .collect();

    let active = viewport::active_section(snapshot).map(str::to_string);
    if state.set_active_section(active.clone()) {
        effects.push(Effect::SetActiveSection(active));
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::FormInput;
    use crate::core::viewport::SectionMetrics;

    fn snapshot(card_tops: Vec<f64>, sections: Vec<SectionMetrics>) -> ViewportSnapshot {
        ViewportSnapshot {
            viewport_height: 800.0,
            card_tops,
            sections,
        }
    }

    fn valid_input() -> FormInput {
        FormInput {
            name: "Al".to_string(),
            email: "a@b.co".to_string(),
            message: "1234567890".to_string(),
        }
    }

    #[test]
    fn toggle_menu_flips_state_each_time() {
        let mut state = PageState::new();
        assert_eq!(
            Reducer::reduce(&mut state, Intent::ToggleMenu),
            vec![Effect::SetMenuOpen(true)]
        );
        assert_eq!(
            Reducer::reduce(&mut state, Intent::ToggleMenu),
            vec![Effect::SetMenuOpen(false)]
        );
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut state = PageState::new();
        assert!(Reducer::reduce(&mut state, Intent::CloseMenu).is_empty());
        Reducer::reduce(&mut state, Intent::ToggleMenu);
        assert_eq!(
            Reducer::reduce(&mut state, Intent::CloseMenu),
            vec![Effect::SetMenuOpen(false)]
        );
    }

    #[test]
    fn invalid_submit_clears_then_shows_errors_without_reset() {
        let mut state = PageState::new();
        let effects = Reducer::reduce(
            &mut state,
            Intent::SubmitForm {
                input: FormInput::default(),
            },
        );
        assert_eq!(effects[0], Effect::ClearErrors);
        match &effects[1] {
            Effect::ShowErrors(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected ShowErrors, got {other:?}"),
        }
        assert!(!effects.contains(&Effect::ResetForm));
    }

    #[test]
    fn valid_submit_logs_shows_success_resets_and_schedules_removal() {
        let mut state = PageState::new();
        let effects = Reducer::reduce(
            &mut state,
            Intent::SubmitForm {
                input: valid_input(),
            },
        );
        assert_eq!(effects[0], Effect::ClearErrors);
        assert_eq!(effects[1], Effect::LogSubmission(valid_input()));
        assert_eq!(effects[2], Effect::ShowSuccess);
        assert_eq!(effects[3], Effect::ResetForm);
        assert_eq!(
            effects[4],
            Effect::Schedule(SchedulerCommand::EmitAfter {
                delay: SUCCESS_VISIBLE_FOR,
                event: AppEvent::Intent(Intent::DismissSuccess),
            })
        );
    }

    #[test]
    fn scroll_reveal_never_repeats_a_card() {
        let mut state = PageState::new();
        let first = Reducer::reduce(
            &mut state,
            Intent::UpdateScrollEffects {
                snapshot: snapshot(vec![100.0, 900.0], vec![]),
            },
        );
        assert_eq!(first, vec![Effect::RevealCard(0)]);

        // Scrolling away must not hide card 0 again; only card 1 enters.
        let second = Reducer::reduce(
            &mut state,
            Intent::UpdateScrollEffects {
                snapshot: snapshot(vec![-500.0, 200.0], vec![]),
            },
        );
        assert_eq!(second, vec![Effect::RevealCard(1)]);
    }

    #[test]
    fn active_section_effect_fires_only_on_change() {
        let mut state = PageState::new();
        let sections = vec![
            SectionMetrics {
                id: "s1".to_string(),
                top: 50.0,
                height: 200.0,
            },
            SectionMetrics {
                id: "s2".to_string(),
                top: 300.0,
                height: 200.0,
            },
        ];
        let first = Reducer::reduce(
            &mut state,
            Intent::UpdateScrollEffects {
                snapshot: snapshot(vec![], sections.clone()),
            },
        );
        assert!(first.contains(&Effect::SetActiveSection(Some("s1".to_string()))));

        let second = Reducer::reduce(
            &mut state,
            Intent::UpdateScrollEffects {
                snapshot: snapshot(vec![], sections),
            },
        );
        assert!(second.is_empty());
    }

    #[test]
    fn initialization_logs_the_banner_and_applies_initial_reveal() {
        let mut state = PageState::new();
        let effects = Reducer::reduce(
            &mut state,
            Intent::Initialize {
                snapshot: snapshot(vec![100.0], vec![]),
                hero_text: None,
            },
        );
        let logs = effects
            .iter()
            .filter(|effect| matches!(effect, Effect::Log(_)))
            .count();
        assert_eq!(logs, 3);
        assert!(effects.contains(&Effect::RevealCard(0)));
    }

    #[test]
    fn typewriter_ticks_until_the_text_is_exhausted() {
        let mut state = PageState::new().with_typewriter(Duration::from_millis(100));
        let init = Reducer::reduce(
            &mut state,
            Intent::Initialize {
                snapshot: snapshot(vec![], vec![]),
                hero_text: Some("Ha".to_string()),
            },
        );
        assert!(init.contains(&Effect::SetHeroText(String::new())));

        let first = Reducer::reduce(&mut state, Intent::TypewriterTick);
        assert_eq!(first[0], Effect::SetHeroText("H".to_string()));
        assert_eq!(first.len(), 2);

        let last = Reducer::reduce(&mut state, Intent::TypewriterTick);
        assert_eq!(last, vec![Effect::SetHeroText("Ha".to_string())]);

        assert!(Reducer::reduce(&mut state, Intent::TypewriterTick).is_empty());
    }
}
