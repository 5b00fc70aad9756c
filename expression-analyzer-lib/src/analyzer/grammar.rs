/// The production rules recognized by the parser, tightest binding last.
///
/// Reference text for display only.
pub const GRAMMAR: &str = r#"expression := term    (("+"|"-") term)*
term       := factor  (("*"|"/") factor)*
factor     := power   ("!")*
power      := primary ("^" primary)*
primary    := NUMBER
            | "(" expression ")"
            | FUNCTION "(" expression ")""#;
