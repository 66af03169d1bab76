/// Display text shown for any invalid operation.
pub const ERROR_DISPLAY: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "%" => Some(Self::Modulo),
            _ => None,
        }
    }
}

/// Applies `op` to two decimal operands and formats the result for the display.
///
/// Returns [`ERROR_DISPLAY`] for unparsable or non-finite operands, division or modulo by zero,
/// and non-finite results.
pub fn calculate(a: &str, b: &str, op: Operator) -> String {
    let (Some(lhs), Some(rhs)) = (parse_operand(a), parse_operand(b)) else {
        return ERROR_DISPLAY.to_string();
    };
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide | Operator::Modulo if rhs == 0.0 => {
            return ERROR_DISPLAY.to_string();
        }
        Operator::Divide => lhs / rhs,
        Operator::Modulo => lhs % rhs,
    };
    if result.is_finite() {
        format_number(result)
    } else {
        ERROR_DISPLAY.to_string()
    }
}

fn parse_operand(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Shortest round-trip decimal form, with negative zero shown as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcKey {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
}

/// Maps a keypad button label to its key.
pub fn key_for_label(label: &str) -> Option<CalcKey> {
    match label {
        "C" => Some(CalcKey::Clear),
        "=" => Some(CalcKey::Equals),
        "." => Some(CalcKey::Decimal),
        _ => {
            if let Some(op) = Operator::from_symbol(label) {
                return Some(CalcKey::Operator(op));
            }
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() => Some(CalcKey::Digit(digit)),
                _ => None,
            }
        }
    }
}

pub fn keyboard_key(key: &str) -> Option<CalcKey> {
    match key {
        "Enter" => Some(CalcKey::Equals),
        "Escape" | "Delete" | "c" => Some(CalcKey::Clear),
        "," => Some(CalcKey::Decimal),
        "x" | "X" => Some(CalcKey::Operator(Operator::Multiply)),
        _ => key_for_label(key),
    }
}

/// Single-pending-operator calculator: `a op b` is evaluated when the next operator or `=`
/// arrives, never with precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    current: String,
    previous: Option<String>,
    operator: Option<Operator>,
    /// The next digit starts a new entry instead of appending.
    should_reset: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
            should_reset: false,
        }
    }
}

impl CalculatorState {
    pub fn display(&self) -> &str {
        &self.current
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_error(&self) -> bool {
        self.current == ERROR_DISPLAY
    }

    pub fn apply(&mut self, key: CalcKey) {
        match key {
            CalcKey::Clear => *self = Self::default(),
            CalcKey::Digit(digit) => self.input(digit),
            CalcKey::Decimal => self.input('.'),
            CalcKey::Operator(op) => self.set_operator(op),
            CalcKey::Equals => self.equals(),
        }
    }

    fn input(&mut self, ch: char) {
        if self.is_error() {
            *self = Self::default();
        }
        if self.should_reset {
            self.current = if ch == '.' {
                "0.".to_string()
            } else {
                ch.to_string()
            };
            self.should_reset = false;
            return;
        }
        if ch == '.' {
            if !self.current.contains('.') {
                self.current.push('.');
            }
        } else if self.current == "0" {
            self.current = ch.to_string();
        } else {
            self.current.push(ch);
        }
    }

    fn set_operator(&mut self, op: Operator) {
        if self.is_error() {
            return;
        }
        if let (Some(previous), Some(pending)) = (self.previous.as_deref(), self.operator) {
            if !self.should_reset {
                self.current = calculate(previous, &self.current, pending);
            }
        }
        self.previous = Some(self.current.clone());
        self.operator = Some(op);
        self.should_reset = true;
    }

    fn equals(&mut self) {
        let (Some(previous), Some(pending)) = (self.previous.take(), self.operator.take()) else {
            return;
        };
        self.current = calculate(&previous, &self.current, pending);
        self.should_reset = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(state: &mut CalculatorState, labels: &str) {
        for label in labels.split_whitespace() {
            state.apply(key_for_label(label).expect("known key"));
        }
    }

    fn run(labels: &str) -> String {
        let mut state = CalculatorState::default();
        press(&mut state, labels);
        state.display().to_string()
    }

    #[test]
    fn calculate_covers_all_operators() {
        assert_eq!(calculate("6", "3", Operator::Divide), "2");
        assert_eq!(calculate("7", "2", Operator::Modulo), "1");
        assert_eq!(calculate("2.5", "4", Operator::Multiply), "10");
        assert_eq!(calculate("1", "3", Operator::Subtract), "-2");
        assert_eq!(calculate("0.1", "0.2", Operator::Add), "0.30000000000000004");
    }

    #[test]
    fn calculate_reports_error_for_invalid_operations() {
        assert_eq!(calculate("5", "0", Operator::Divide), ERROR_DISPLAY);
        assert_eq!(calculate("5", "0", Operator::Modulo), ERROR_DISPLAY);
        assert_eq!(calculate("Error", "1", Operator::Add), ERROR_DISPLAY);
        assert_eq!(calculate("inf", "1", Operator::Add), ERROR_DISPLAY);
        assert_eq!(calculate("1e308", "10", Operator::Multiply), ERROR_DISPLAY);
    }

    #[test]
    fn negative_zero_displays_as_zero() {
        assert_eq!(calculate("-0", "0", Operator::Add), "0");
        assert_eq!(calculate("0", "-1", Operator::Multiply), "0");
    }

    #[test]
    fn digit_entry_replaces_leading_zero_and_ignores_second_decimal() {
        assert_eq!(run("0 0 7"), "7");
        assert_eq!(run("1 . 2 . 5"), "1.25");
        assert_eq!(run(". 5"), "0.5");
    }

    #[test]
    fn chained_operator_applies_pending_operation_first() {
        let mut state = CalculatorState::default();
        press(&mut state, "5 + 3 *");
        assert_eq!(state.display(), "8");
        assert_eq!(state.pending_operator(), Some(Operator::Multiply));

        press(&mut state, "2 =");
        assert_eq!(state.display(), "16");
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn repeated_operator_only_replaces_pending_one() {
        assert_eq!(run("9 + - 4 ="), "5");
    }

    #[test]
    fn equals_without_pending_operation_is_ignored() {
        assert_eq!(run("4 2 ="), "42");
        assert_eq!(run("4 + 2 = ="), "6");
    }

    #[test]
    fn entry_after_equals_starts_fresh() {
        assert_eq!(run("4 + 2 = 9"), "9");
        assert_eq!(run("4 + 2 = ."), "0.");
    }

    #[test]
    fn error_is_cleared_by_next_digit() {
        let mut state = CalculatorState::default();
        press(&mut state, "5 / 0 =");
        assert!(state.is_error());

        press(&mut state, "+");
        assert!(state.is_error());

        press(&mut state, "3");
        assert_eq!(state, {
            let mut fresh = CalculatorState::default();
            press(&mut fresh, "3");
            fresh
        });
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = CalculatorState::default();
        press(&mut state, "1 2 + 3 C");
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn keyboard_aliases_map_to_keypad_keys() {
        assert_eq!(keyboard_key("Enter"), Some(CalcKey::Equals));
        assert_eq!(keyboard_key("x"), Some(CalcKey::Operator(Operator::Multiply)));
        assert_eq!(keyboard_key("7"), Some(CalcKey::Digit('7')));
        assert_eq!(keyboard_key("Escape"), Some(CalcKey::Clear));
        assert_eq!(keyboard_key("c"), Some(CalcKey::Clear));
        assert_eq!(keyboard_key("a"), None);
    }
}
