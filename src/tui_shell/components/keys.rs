use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key chord parsed from config text such as `ctrl-m` or `alt-enter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct KeyBinding {
    pub(in crate::tui_shell) code: KeyCode,
    pub(in crate::tui_shell) modifiers: KeyModifiers,
}

impl KeyBinding {
    pub(in crate::tui_shell) fn parse(s: &str) -> Result<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split(['-', '+']).filter(|p| !p.is_empty()).collect();
        let Some((key, mods)) = parts.split_last() else {
            bail!("empty key binding");
        };
        for m in mods {
            modifiers |= match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                other => bail!("unknown modifier `{}` in `{}`", other, s),
            };
        }
        let lower = key.to_ascii_lowercase();
        let code = match lower.as_str() {
            "enter" | "return" => KeyCode::Enter,
            "space" => KeyCode::Char(' '),
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            k if k.starts_with('f') && k.len() > 1 => match k[1..].parse::<u8>() {
                Ok(n) => KeyCode::F(n),
                Err(_) => bail!("unknown key `{}` in `{}`", key, s),
            },
            k if k.chars().count() == 1 => KeyCode::Char(k.chars().next().unwrap_or(' ')),
            _ => bail!("unknown key `{}` in `{}`", key, s),
        };
        Ok(Self { code, modifiers })
    }

    /// Control chords that legacy terminals send as Enter, Tab, Esc or Backspace.
    pub(in crate::tui_shell) fn needs_disambiguation(&self) -> bool {
        self.modifiers == KeyModifiers::CONTROL
            && matches!(self.code, KeyCode::Char('m' | 'M' | 'j' | 'J' | 'i' | 'I' | 'h' | 'H' | '['))
    }

    pub(in crate::tui_shell) fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        code_matches && key.modifiers == self.modifiers
    }
}

impl std::fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl-")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt-")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("shift-")?;
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::F(n) => write!(f, "f{}", n),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Esc => f.write_str("esc"),
            other => write!(f, "{:?}", other),
        }
    }
}
