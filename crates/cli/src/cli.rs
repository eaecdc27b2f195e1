// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::logger::setup_tracing;
use crate::redeem;
use alloy_primitives::U256;
use anyhow::Result;
use clap::{command, ArgAction, Parser};
use ctf_config::load_config;
use ctf_evm::RedemptionRequest;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "ctf-redeem")]
#[command(about = "Redeem a settled conditional-token position through the proxy wallet", long_about = None)]
pub struct Cli {
    /// The market condition id (32 bytes, 0x-prefixed hex)
    pub condition_id: String,

    /// Whether this is a neg-risk market; "true" or "1" means yes,
    /// anything else no
    #[arg(default_value = "false")]
    pub neg_risk: String,

    /// YES amount to redeem (neg-risk markets only)
    #[arg(default_value_t = 1)]
    pub yes_amount: u64,

    /// NO amount to redeem (neg-risk markets only)
    #[arg(default_value_t = 1)]
    pub no_amount: u64,

    /// Extra attempts for the fee-data fetch when the RPC misbehaves.
    /// The default of 0 fails fast.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Increase log detail by adding additional `-v` arguments. Eg. `-vv`
    /// will give you trace level output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::INFO,  //
                1 => Level::DEBUG, // -v
                _ => Level::TRACE, // -vv
            }
        }
    }

    pub fn neg_risk(&self) -> bool {
        matches!(self.neg_risk.as_str(), "true" | "1")
    }

    pub fn request(&self) -> RedemptionRequest {
        RedemptionRequest {
            condition_id: self.condition_id.clone(),
            neg_risk: self.neg_risk(),
            yes_amount: U256::from(self.yes_amount),
            no_amount: U256::from(self.no_amount),
        }
    }

    pub async fn execute(self) -> Result<()> {
        setup_tracing(self.log_level());

        let config = load_config()?;
        redeem::execute(&config, self.request(), self.retries).await
    }
}
