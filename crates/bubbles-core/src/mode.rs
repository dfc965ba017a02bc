use crate::error::{Error, Result};
use crate::node::Attribute;
use std::fmt;

/// Grouping shown by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Every bubble gathers around the canvas center.
    #[default]
    Default,
    Support,
    Office,
    Ministry,
    Media,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Default,
        Mode::Support,
        Mode::Office,
        Mode::Ministry,
        Mode::Media,
    ];

    /// Id of the toolbar button that selects this mode.
    pub const fn trigger(self) -> &'static str {
        match self {
            Mode::Default => "all",
            Mode::Support => "soutien",
            Mode::Office => "elu",
            Mode::Ministry => "ministre",
            Mode::Media => "media",
        }
    }

    /// Maps a button id to its mode. Unknown ids select [`Mode::Default`], as the published
    /// toolbar does; use [`Mode::from_trigger_strict`] to reject them instead.
    pub fn from_trigger(trigger: &str) -> Mode {
        Self::from_trigger_strict(trigger).unwrap_or_else(|_| {
            tracing::warn!(trigger, "unknown trigger, falling back to the default mode");
            Mode::Default
        })
    }

    pub fn from_trigger_strict(trigger: &str) -> Result<Mode> {
        Mode::ALL
            .into_iter()
            .find(|m| m.trigger() == trigger)
            .ok_or_else(|| Error::UnknownMode {
                trigger: trigger.to_string(),
            })
    }

    /// Attribute the mode splits by; `None` for the default mode.
    pub const fn attribute(self) -> Option<Attribute> {
        match self {
            Mode::Default => None,
            Mode::Support => Some(Attribute::Support),
            Mode::Office => Some(Attribute::Office),
            Mode::Ministry => Some(Attribute::Ministry),
            Mode::Media => Some(Attribute::Media),
        }
    }

    /// Key of the descriptive text shown under the chart.
    pub const fn panel_key(self) -> &'static str {
        match self {
            Mode::Default => "ini",
            Mode::Support => "soutien",
            Mode::Office => "elu",
            Mode::Ministry => "ministre",
            Mode::Media => "media",
        }
    }

    /// Descriptive text (HTML fragment) shown under the chart while this mode is active.
    pub const fn description(self) -> &'static str {
        match self {
            Mode::Default => {
                "Qui sont les soutiens d'E. Lepen ? Voici probablement ceux qui ont la plus grande notoriété. Cliquez sur les boutons au dessus des bulles pour le voir. Survolez les bulles pour les identifier..."
            }
            Mode::Support => {
                "Savoir qui ont soutenu les lepenistes éclaire sur la confusion idéologique de ce mouvement... Il en ressort néanomoins que le candidat Lepen se place majoritairement dans la filiation directe de François Hollande... <a target='_blank' href='https://www.challenges.fr/election-presidentielle-2017/pourquoi-hollande-et-royal-demolissent-la-primaire-ps-pour-lepen_448496'>lequel a du mal à s'en cacher</a>."
            }
            Mode::Office => {
                "Quels sont les lepenistes qui ont déjà exercé un mandat électif ? Quels sont ceux qui ont travaillé dans les cabinets ministériels ou comme conseillers des puissants ? Qui sont ces dangereux personnages \"antisystèmes\" ???"
            }
            Mode::Ministry => {
                "Les lepenistes ont-ils déjà exercé un ministère ou été secrétaires d'Etat ?<br> Est-ce que c'est dans les vieux pots qu'on cuisine les meilleures politiques ?"
            }
            Mode::Media => {
                "Famille Lepen est régulièrement décrit comme le candidat des médias (voire même parfois comme une construction médiatique). Le site <a href='https://candidats.media/'>candidats.media</a> le montre bien. Il est intéressant, dans ce contexte, de voir quels sont ceux qui le soutiennent officiellement."
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trigger())
    }
}
