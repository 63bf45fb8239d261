//! The cleantext protocol as an explicit ordered rule list.
//!
//! Normalization is trim + lowercase, then a fold over [`Ruleset::rules`] in
//! declaration order, then edge padding and space collapsing. Rule order is
//! load-bearing: later rules may re-match text produced by earlier ones (the
//! hyphen rule also spaces hyphens introduced by escape tokens, and the final
//! collapse absorbs every space inserted before it).
//!
//! The output alphabet is lowercase `a-z`, digits, space, and the literal
//! symbols `;"'_-:!?.()@$*&#%+`. Anything else becomes a space, so
//! normalization is total over arbitrary input.
//!
//! Semicolons carry channel information downstream: a true semicolon in the
//! source becomes the padded token `;;`, while a comma becomes a padded
//! single `;`. The semicolon rule classifies each run of semicolons so that
//! re-normalizing already-normalized text is a no-op (a lone `;` bounded by
//! spaces or string edges is comma-channel output and stays single).

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// How a rule rewrites its matches.
#[derive(Debug, Clone, Copy)]
enum Action {
    /// Replace every match with a literal string.
    Literal(&'static str),
    /// Replace every match, expanding `$n` capture references.
    Template(&'static str),
    /// Classify each semicolon run as comma-channel or true semicolon.
    SemicolonChannel,
}

/// One ordered rewrite rule: a pattern plus its replacement action.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    action: Action,
}

impl RewriteRule {
    fn new(name: &'static str, pattern: &str, action: Action) -> Self {
        Self {
            name,
            // Patterns are fixed at compile time; a failure here is a bug in
            // the rule table, not an input condition.
            pattern: Regex::new(pattern).expect("hard-coded rule pattern"),
            action,
        }
    }

    /// Short identifier for the rule, used in the CLI rule listing.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The pattern source text.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Human-readable replacement text for the rule listing.
    pub fn replacement_display(&self) -> &'static str {
        match self.action {
            Action::Literal(replacement) | Action::Template(replacement) => replacement,
            Action::SemicolonChannel => "' ; ' or ' ;; '",
        }
    }

    /// Applies the rule to the whole string, returning the rewritten text.
    pub fn apply(&self, text: &str) -> String {
        match self.action {
            Action::Literal(replacement) => self
                .pattern
                .replace_all(text, NoExpand(replacement))
                .into_owned(),
            Action::Template(replacement) => {
                self.pattern.replace_all(text, replacement).into_owned()
            }
            Action::SemicolonChannel => rewrite_semicolon_runs(&self.pattern, text),
        }
    }
}

/// Rewrites each maximal run of semicolons.
///
/// A run of two or more, or a single semicolon attached to a neighboring
/// non-space character, is a true semicolon and becomes the padded `;;`
/// token. A single semicolon already bounded by spaces (or the string edge)
/// is comma-channel output from a previous pass and stays a padded single
/// `;`, which keeps normalization idempotent.
fn rewrite_semicolon_runs(pattern: &Regex, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let comma_channel = m.len() == 1
            && before.is_none_or(|ch| ch == ' ')
            && after.is_none_or(|ch| ch == ' ');
        out.push_str(if comma_channel { " ; " } else { " ;; " });
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

static COLLAPSE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" {2,}").expect("hard-coded rule pattern"));

static STANDARD: LazyLock<Ruleset> = LazyLock::new(Ruleset::standard);

/// Shared read-only instance of the standard cleantext ruleset.
pub fn standard_ruleset() -> &'static Ruleset {
    &STANDARD
}

/// The ordered cleantext rule list.
///
/// Built once and never mutated afterwards; a processing run may share one
/// instance across workers freely.
#[derive(Debug, Clone)]
pub struct Ruleset {
    rules: Vec<RewriteRule>,
}

impl Ruleset {
    /// Builds the standard cleantext protocol.
    pub fn standard() -> Self {
        let rules = vec![
            // Tabs join the whitespace channel before anything else looks at
            // spacing.
            RewriteRule::new("tab", r"\t", Action::Literal(" ")),
            // True semicolons become the padded ;; token; see
            // rewrite_semicolon_runs for the comma-channel exception.
            RewriteRule::new("semicolon", ";+", Action::SemicolonChannel),
            // Upstream escape token for a semicolon.
            RewriteRule::new("semicolon-escape", r"\[sc\]", Action::Literal(" ;; ")),
            // Commas fold into the single-semicolon channel.
            RewriteRule::new("comma", ",", Action::Literal(" ; ")),
            // Upstream escape token for a comma.
            RewriteRule::new("comma-escape", r"\[c\]", Action::Literal(" ; ")),
            // Upstream escape token for a double quote.
            RewriteRule::new("double-quote-escape", r"\[dq\]", Action::Literal(" \" ")),
            // Upstream escape token for a single quote.
            RewriteRule::new("single-quote-escape", r"\[sq\]", Action::Literal(" ' ")),
            // Backticks are treated as apostrophes.
            RewriteRule::new("backtick", "`", Action::Literal(" ' ")),
            RewriteRule::new("apostrophe", "'", Action::Literal(" ' ")),
            // Underscores keep a literal underscore token, distinct from the
            // hyphen channel. The backslash is outside the retained alphabet
            // and falls away at the alphabet rule below.
            RewriteRule::new("underscore", "_", Action::Literal(" \\_ ")),
            // Runs after the escape rules so hyphens they introduce are also
            // spaced.
            RewriteRule::new("hyphen", "-", Action::Literal(" - ")),
            RewriteRule::new("colon", ":", Action::Literal(" : ")),
            RewriteRule::new("exclamation", "!", Action::Literal(" ! ")),
            RewriteRule::new("question", r"\?", Action::Literal(" ? ")),
            RewriteRule::new("period", r"\.", Action::Literal(" . ")),
            RewriteRule::new("open-paren", r"\(", Action::Literal(" ( ")),
            RewriteRule::new("close-paren", r"\)", Action::Literal(" ) ")),
            RewriteRule::new("at", "@", Action::Literal(" @ ")),
            RewriteRule::new("dollar", r"\$", Action::Literal(" $ ")),
            RewriteRule::new("asterisk", r"\*", Action::Literal(" * ")),
            RewriteRule::new("ampersand", "&", Action::Literal(" & ")),
            RewriteRule::new("hash", "#", Action::Literal(" # ")),
            RewriteRule::new("percent", "%", Action::Literal(" % ")),
            RewriteRule::new("plus", r"\+", Action::Literal(" + ")),
            // Maximal digit runs are wrapped in spaces, digits verbatim.
            RewriteRule::new("digits", "[0-9]+", Action::Template(" ${0} ")),
            // Everything outside the retained alphabet becomes a space. Must
            // run after every rule above so their byproducts (the underscore
            // backslash in particular) are swept up.
            RewriteRule::new(
                "alphabet",
                r#"[^a-z0-9;"'_\-:!?.()@$*&#%+ ]"#,
                Action::Literal(" "),
            ),
        ];
        Self { rules }
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Normalizes `text` into canonical cleantext form.
    ///
    /// Pure and total: never fails, never mutates its input. The result has
    /// one leading and one trailing space and no interior space runs.
    pub fn normalize(&self, text: &str) -> String {
        let prepared = text.trim().to_lowercase();
        let rewritten = self
            .rules
            .iter()
            .fold(prepared, |acc, rule| rule.apply(&acc));
        // Edge padding then collapse must come last so every space inserted
        // above reduces to a single separator.
        let padded = format!(" {rewritten} ");
        COLLAPSE_SPACES.replace_all(&padded, " ").into_owned()
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::standard()
    }
}
