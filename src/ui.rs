//! HUD and control panel
//!
//! `Hud` is a plain view of the session; on wasm it is written into the DOM
//! elements of `index.html` once per frame.

use crate::sim::{GamePhase, MATERIALS, NoticeKind, Session, VEHICLES};

/// State of one material button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialButton {
    pub name: &'static str,
    pub cost: String,
    pub strength: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Where a vehicle sits on the ladder relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Done,
    Current,
    Pending,
}

impl Progress {
    pub fn class(&self) -> &'static str {
        match self {
            Progress::Done => "done",
            Progress::Current => "current",
            Progress::Pending => "pending",
        }
    }
}

/// One entry of the vehicle ladder in the help card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rung {
    /// Icon, name, and required strength, e.g. `🚲 دوچرخه (15)`
    pub label: String,
    pub progress: Progress,
}

/// Everything the page shell shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub level: String,
    pub budget: String,
    pub score: String,
    pub vehicle_icon: &'static str,
    pub vehicle_name: &'static str,
    pub vehicle_load: String,
    pub materials: Vec<MaterialButton>,
    pub test_label: String,
    pub test_disabled: bool,
    pub reset_disabled: bool,
    pub next_level_disabled: bool,
    /// Result banner text and styling
    pub banner: Option<(String, NoticeKind)>,
    pub ladder: Vec<Rung>,
}

/// Format an amount with thousands separators and a dollar sign
pub fn format_money(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Hud {
    pub fn from_session(session: &Session) -> Self {
        let testing = session.phase() == GamePhase::Testing;
        let vehicle = session.vehicle();

        let materials = MATERIALS
            .iter()
            .enumerate()
            .map(|(i, m)| MaterialButton {
                name: m.name,
                cost: format!("هزینه: {}", format_money(m.cost)),
                strength: format!("قدرت: {}", m.strength),
                selected: i == session.material_index,
                disabled: testing,
            })
            .collect();

        let ladder = VEHICLES
            .iter()
            .enumerate()
            .map(|(i, v)| Rung {
                label: format!("{} {} ({})", v.icon, v.name, v.required_strength),
                progress: match i.cmp(&session.vehicle_index) {
                    std::cmp::Ordering::Less => Progress::Done,
                    std::cmp::Ordering::Equal => Progress::Current,
                    std::cmp::Ordering::Greater => Progress::Pending,
                },
            })
            .collect();

        let test_label = if testing {
            "در حال تست...".to_string()
        } else {
            format!("آزمایش با {}", vehicle.name)
        };

        Self {
            level: session.level.to_string(),
            budget: format_money(session.budget),
            score: session.score.to_string(),
            vehicle_icon: vehicle.icon,
            vehicle_name: vehicle.name,
            vehicle_load: format!("بار: {}", vehicle.required_strength),
            materials,
            test_label,
            test_disabled: testing || session.beams.is_empty(),
            reset_disabled: testing,
            next_level_disabled: testing,
            banner: session.message.as_ref().map(|m| (m.to_string(), m.kind())),
            ladder,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlButtonElement};

    use super::Hud;
    use crate::sim::NoticeKind;

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    fn set_disabled(document: &Document, id: &str, disabled: bool) {
        if let Some(btn) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            btn.set_disabled(disabled);
        }
    }

    impl Hud {
        /// Write the HUD into the page
        pub fn apply(&self, document: &Document) {
            set_text(document, "hud-level", &self.level);
            set_text(document, "hud-budget", &self.budget);
            set_text(document, "hud-score", &self.score);
            set_text(document, "hud-vehicle-icon", self.vehicle_icon);
            set_text(document, "hud-vehicle-name", self.vehicle_name);
            set_text(document, "hud-vehicle-load", &self.vehicle_load);

            for (i, m) in self.materials.iter().enumerate() {
                let id = format!("material-{}", i);
                set_text(document, &format!("material-{}-name", i), m.name);
                set_text(document, &format!("material-{}-cost", i), &m.cost);
                set_text(document, &format!("material-{}-strength", i), &m.strength);
                set_class(
                    document,
                    &id,
                    if m.selected { "material selected" } else { "material" },
                );
                set_disabled(document, &id, m.disabled);
            }

            set_text(document, "test-btn", &self.test_label);
            set_disabled(document, "test-btn", self.test_disabled);
            set_disabled(document, "reset-btn", self.reset_disabled);
            set_disabled(document, "next-level-btn", self.next_level_disabled);

            match &self.banner {
                Some((text, kind)) => {
                    set_text(document, "result", text);
                    let class = match kind {
                        NoticeKind::Success => "result success",
                        NoticeKind::Failure => "result failure",
                    };
                    set_class(document, "result", class);
                }
                None => {
                    set_text(document, "result", "");
                    set_class(document, "result", "result hidden");
                }
            }

            for (i, rung) in self.ladder.iter().enumerate() {
                let id = format!("progress-{}", i);
                set_text(document, &id, &rung.label);
                set_class(document, &id, rung.progress.class());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Notice;
    use crate::sim::Rejection;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(150), "$150");
        assert_eq!(format_money(1500), "$1,500");
        assert_eq!(format_money(50_000), "$50,000");
        assert_eq!(format_money(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_fresh_session_hud() {
        let hud = Hud::from_session(&Session::default());
        assert_eq!(hud.level, "1");
        assert_eq!(hud.budget, "$50,000");
        assert_eq!(hud.score, "0");
        assert_eq!(hud.vehicle_icon, "🚲");
        assert_eq!(hud.vehicle_load, "بار: 15");
        assert_eq!(hud.test_label, "آزمایش با دوچرخه");
        // Nothing to test yet
        assert!(hud.test_disabled);
        assert!(!hud.reset_disabled);
        assert_eq!(hud.banner, None);
        assert!(hud.materials[0].selected);
        assert!(!hud.materials[1].selected);
        assert_eq!(hud.materials[2].cost, "هزینه: $150");
        assert_eq!(hud.ladder.len(), 8);
        assert_eq!(hud.ladder[0].progress, Progress::Current);
        assert_eq!(hud.ladder[1].progress, Progress::Pending);
    }

    #[test]
    fn test_hud_while_testing() {
        let mut s = Session::default();
        s.vehicle_index = 2;
        crate::sim::actions::click(&mut s, crate::sim::CONNECTION_POINTS[0]).unwrap();
        crate::sim::actions::click(&mut s, crate::sim::CONNECTION_POINTS[1]).unwrap();
        crate::sim::actions::start_test(&mut s, 0.0).unwrap();

        let hud = Hud::from_session(&s);
        assert_eq!(hud.test_label, "در حال تست...");
        assert!(hud.test_disabled);
        assert!(hud.reset_disabled);
        assert!(hud.next_level_disabled);
        assert!(hud.materials.iter().all(|m| m.disabled));
        let states: Vec<Progress> = hud.ladder.iter().map(|r| r.progress).collect();
        assert_eq!(
            states,
            vec![
                Progress::Done,
                Progress::Done,
                Progress::Current,
                Progress::Pending,
                Progress::Pending,
                Progress::Pending,
                Progress::Pending,
                Progress::Pending,
            ]
        );
    }

    #[test]
    fn test_ladder_labels_show_name_and_load() {
        let hud = Hud::from_session(&Session::default());
        assert_eq!(hud.ladder[0].label, "🚲 دوچرخه (15)");
        assert_eq!(hud.ladder[2].label, "🚗 ماشین (40)");
        assert_eq!(hud.ladder[7].label, "🚛 تریلی سنگین (160)");
    }

    #[test]
    fn test_banner_kind_follows_notice() {
        let mut s = Session::default();
        s.message = Some(Notice::Collapsed { required: 25, actual: 10 });
        let (text, kind) = Hud::from_session(&s).banner.unwrap();
        // The failure text contains the success word as a substring; styling
        // must not depend on that
        assert!(text.contains("موفق"));
        assert_eq!(kind, NoticeKind::Failure);

        s.message = Some(Notice::Rejected(Rejection::NoBeams));
        assert_eq!(Hud::from_session(&s).banner.unwrap().1, NoticeKind::Failure);

        s.message = Some(Notice::Crossed { vehicle: "ماشین", earned: 700 });
        assert_eq!(Hud::from_session(&s).banner.unwrap().1, NoticeKind::Success);
    }
}
