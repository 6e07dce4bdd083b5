//! Formatted terminal output

use scamguard_core::{Decision, IndicatorType, Label};

/// Ten-step visual confidence meter, e.g. `▓▓▓▓▓▓▓▓░░`
pub fn confidence_meter(confidence: f64) -> String {
    let percent = (confidence * 100.0) as u32;
    let bars = (percent / 10).min(10) as usize;
    format!("{}{}", "▓".repeat(bars), "░".repeat(10 - bars))
}

/// Banner line separating interactive results
pub fn print_result_banner(decision: &Decision) {
    let (symbol, border) = match decision.label {
        Label::Scam => ("❌", "!"),
        Label::Real => ("✅", "="),
    };
    println!("\n{}", border.repeat(50));
    println!(
        "RESULT: {symbol} This message is classified as: {}",
        decision.label.as_str().to_uppercase()
    );
    println!("{}", border.repeat(50));
}

/// Print the decision details: confidence, risk signals, key indicators
pub fn print_decision(decision: &Decision) {
    println!(
        "Classification: {}",
        decision.label.as_str().to_uppercase()
    );
    println!(
        "Confidence: {} [{}]",
        decision.confidence_percentage(),
        confidence_meter(decision.confidence)
    );

    if !decision.signals.is_empty() {
        println!("\n🚨 HIGH-RISK SIGNALS DETECTED:");
        for signal in &decision.signals {
            println!("  • {}", signal.explanation);
        }
    }

    if !decision.attributions.is_empty() {
        println!("\nKey indicators:");
        for attribution in &decision.attributions {
            let icon = match attribution.indicator_type() {
                IndicatorType::Scam => "⚠️",
                IndicatorType::Legitimate => "✓",
            };
            println!(
                "  • {icon} '{}': {} (weight: {:.4})",
                attribution.term,
                attribution.indicator_type().as_str(),
                attribution.weight()
            );
        }
    }

    if !decision.explanations.is_empty() {
        println!("\nWhy:");
        for sentence in &decision.explanations {
            println!("  • {sentence}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_meter_scales() {
        assert_eq!(confidence_meter(0.0), "░░░░░░░░░░");
        assert_eq!(confidence_meter(0.85), "▓▓▓▓▓▓▓▓░░");
        assert_eq!(confidence_meter(1.0), "▓▓▓▓▓▓▓▓▓▓");
    }
}
