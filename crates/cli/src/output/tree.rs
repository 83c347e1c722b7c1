use colored::Colorize;
use dnspect_domain::{AttemptOutcome, TraceOutcome, TraceResult, TraceStep};
use std::fmt::Write;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Step-by-step tree of a trace: every server asked, how long it took or why
/// it failed, the referrals followed and the final answers.
pub fn render_trace(result: &TraceResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("DNS Trace: {} ({})", result.domain, result.record_type).bold()
    );

    for (i, step) in result.steps.iter().enumerate() {
        let last_step = i + 1 == result.steps.len();
        let (branch, indent) = if last_step {
            (LAST_BRANCH, SPACE)
        } else {
            (BRANCH, PIPE)
        };

        let _ = writeln!(out, "{}{}", branch, format!("Step {}", step.depth + 1).cyan());

        let lines = step_lines(step);
        for (j, line) in lines.iter().enumerate() {
            let leaf = if j + 1 == lines.len() {
                LAST_BRANCH
            } else {
                BRANCH
            };
            let _ = writeln!(out, "{}{}{}", indent, leaf, line);
        }
    }

    out
}

fn step_lines(step: &TraceStep) -> Vec<String> {
    let mut lines = Vec::with_capacity(step.attempts.len() + step.answers.len() + 1);

    for attempt in &step.attempts {
        let server = attempt.server.to_string();
        lines.push(match &attempt.outcome {
            AttemptOutcome::Responded { latency_ms } => {
                format!("{} ({:.2} ms)", server.yellow(), latency_ms)
            }
            AttemptOutcome::Failed { reason } => {
                format!("{} {}", server.yellow(), format!("failed: {}", reason).red())
            }
        });
    }

    if step.truncated {
        lines.push("response truncated (TC bit set)".yellow().to_string());
    }

    if !step.has_answers() && !step.referrals.is_empty() {
        lines.push(
            format!("referred to {}", step.referrals.join(", "))
                .dimmed()
                .to_string(),
        );
    }

    for answer in &step.answers {
        lines.push(format!("ANSWER → {}", answer).green().to_string());
    }

    lines
}

/// One-line verdict printed after the tree.
pub fn trace_summary(result: &TraceResult) -> String {
    let steps = result.steps.len();
    let plural = if steps == 1 { "" } else { "s" };

    match result.outcome {
        TraceOutcome::Answered => format!(
            "Resolved in {} step{} with {} answer{}",
            steps,
            plural,
            result.answers().len(),
            if result.answers().len() == 1 { "" } else { "s" }
        )
        .green()
        .to_string(),
        TraceOutcome::Stalled => {
            let responded = result
                .steps
                .last()
                .map(|step| step.responded().count())
                .unwrap_or(0);
            let reason = if responded == 0 {
                "no server responded"
            } else {
                "no referred nameserver could be resolved"
            };
            format!("Trace stalled at step {}: {}", steps, reason)
                .yellow()
                .to_string()
        }
        TraceOutcome::Exhausted => format!(
            "Gave up after {} step{} without an answer",
            steps, plural
        )
        .yellow()
        .to_string(),
    }
}
