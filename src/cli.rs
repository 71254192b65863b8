// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "courierdesk")]
#[command(version, author = "Muvon Un Limited <opensource@muvon.io>")]
#[command(about = "Courier customer-care backend: policy answers, support tickets and package tracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Answer a customer question from the policy knowledge base
    Ask {
        /// The question, e.g. "where is my parcel"
        #[arg(required = true)]
        query: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List knowledge base categories in resolution order
    Categories {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Open a support ticket
    Ticket {
        /// Customer email address
        #[arg(short, long)]
        email: String,

        /// Customer phone number
        #[arg(short, long)]
        phone: String,

        /// Description of the issue
        #[arg(short, long)]
        issue: String,

        /// Tracking number of the affected package
        #[arg(short = 'k', long)]
        package: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the status of a package
    Track {
        /// Tracking number
        package_id: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Start MCP server (Model Context Protocol) exposing courier desk tools
    Mcp {
        /// Log at debug level
        #[arg(long)]
        debug: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::parse_from(["courierdesk", "ask", "where", "is", "my", "parcel"]);
        match cli.command {
            Commands::Ask { query, format } => {
                assert_eq!(query.join(" "), "where is my parcel");
                assert_eq!(format, "text");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_ticket_flags() {
        let cli = Cli::parse_from([
            "courierdesk",
            "ticket",
            "-e",
            "a@b.co",
            "-p",
            "123",
            "-i",
            "late",
            "-k",
            "12345",
            "-f",
            "json",
        ]);
        match cli.command {
            Commands::Ticket {
                email,
                package,
                format,
                ..
            } => {
                assert_eq!(email, "a@b.co");
                assert_eq!(package, "12345");
                assert_eq!(format, "json");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["courierdesk", "serve", "--port", "8080"]);
        match cli.command {
            Commands::Serve { host, port } => {
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
