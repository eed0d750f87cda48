//! Implementation of the `slipway list` command.

use slipway_core::domain::{FeatureSet, Tier};

use crate::{
    cli::{GlobalArgs, ListArgs},
    error::CliResult,
    output::OutputManager,
};

/// Print the tier catalogue with each tier's implied feature set.
pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    if args.plain {
        for tier in Tier::ALL {
            output.print(tier.as_str())?;
        }
        return Ok(());
    }

    output.header("Available tiers")?;
    output.print("")?;
    for tier in Tier::ALL {
        output.print(&format!("  {:<8} {}", tier.as_str(), tier.description()))?;
        output.print(&format!("  {:<8} features: {}", "", feature_summary(tier)))?;
        output.print("")?;
    }
    output.info("The minimal tier accepts --docker, --docker-compose, and --ci overrides.")?;
    Ok(())
}

fn feature_summary(tier: Tier) -> String {
    let labels = FeatureSet::tier_defaults(tier).enabled_labels();
    if labels.is_empty() {
        "(none by default)".to_string()
    } else {
        labels.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_summary_is_empty_marker() {
        assert_eq!(feature_summary(Tier::Minimal), "(none by default)");
    }

    #[test]
    fn full_summary_lists_observability() {
        let summary = feature_summary(Tier::Full);
        assert!(summary.contains("observability"));
        assert!(summary.contains("ci:github"));
    }
}
