use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "baydesk")]
#[command(about = "Baydesk reseller back office", long_about = None)]
pub struct Cli {
    /// Override the back-office API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Financial summary and sync
    Financials {
        #[command(subcommand)]
        command: FinancialsCommands,
    },

    /// Transaction history and sync
    Transactions {
        #[command(subcommand)]
        command: TransactionsCommands,
    },

    /// Marketplace orders
    Orders {
        #[command(subcommand)]
        command: OrdersCommands,
    },

    /// List payment disputes
    Disputes,

    /// List listing offers
    Offers,

    /// List stocked inventory
    Inventory,

    /// Business-policy mappings
    Policies {
        #[command(subcommand)]
        command: PoliciesCommands,
    },

    /// AI rule authoring
    Rules {
        #[command(subcommand)]
        command: RulesCommands,
    },

    /// Per-model profitability table
    Profit,

    /// eBay account link
    Ebay {
        #[command(subcommand)]
        command: EbayCommands,
    },

    /// Back-office API credentials
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
pub enum FinancialsCommands {
    /// Show the aggregate summary
    Summary,

    /// Trigger a sync job and watch it to completion
    Sync {
        /// Trigger only; do not wait for the job
        #[arg(long)]
        no_watch: bool,
    },
}

#[derive(Subcommand)]
pub enum TransactionsCommands {
    /// List transactions
    List {
        /// e.g. SALE, REFUND, PAYOUT
        #[arg(long)]
        transaction_type: Option<String>,

        /// Earliest booking date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest booking date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        #[arg(long, default_value_t = 200)]
        limit: i64,

        #[arg(long, default_value_t = 0)]
        offset: i64,
    },

    /// Trigger a sync job and watch it to completion
    Sync {
        /// Trigger only; do not wait for the job
        #[arg(long)]
        no_watch: bool,
    },
}

#[derive(Subcommand)]
pub enum OrdersCommands {
    /// List orders, optionally filtered
    List {
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        buyer: Option<String>,

        /// Earliest creation date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest creation date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Download the full order export as CSV
    Export {
        /// Output file
        #[arg(default_value = "orders.csv")]
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum PoliciesCommands {
    /// List stored mappings
    List,

    /// Create a mapping
    Add {
        #[arg(long)]
        shipping_group: String,

        #[arg(long)]
        shipping_type: String,

        /// Fulfillment policy id
        #[arg(long)]
        fulfillment: Option<String>,

        /// Payment policy id
        #[arg(long)]
        payment: Option<String>,

        /// Return policy id
        #[arg(long)]
        returns: Option<String>,
    },

    /// Delete a mapping by id
    Remove { id: i64 },

    /// Seed default mappings from the marketplace's business policies
    Seed,

    /// Apply stored mappings to the given SKUs
    ApplySkus {
        skus: Vec<String>,

        /// Re-apply even when a SKU already carries policy ids
        #[arg(long)]
        overwrite: bool,
    },
}

#[derive(Subcommand)]
pub enum RulesCommands {
    /// List stored rules
    List,

    /// Create a rule from a natural-language prompt
    Add {
        #[arg(long)]
        name: String,

        /// Natural-language prompt, e.g. "flag orders over $500 without tracking"
        prompt: String,
    },

    /// Preview the generated SQL without saving
    Preview {
        /// Natural-language prompt to translate
        prompt: String,
    },
}

#[derive(Subcommand)]
pub enum EbayCommands {
    /// Start the OAuth consent flow
    Connect,

    /// Drop the stored eBay authorization
    Disconnect,

    /// Show the current link state
    Status,

    /// Show the OAuth audit log
    Log,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store the back-office API token
    Login {
        /// Token value; prompted on stdin when omitted
        token: Option<String>,
    },

    /// Remove the stored token
    Logout,

    /// Show where the token lives and whether one is stored
    Show,
}
