use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use pastry_store::PastryStore;
use pastry_types::{Schema, SchemaProfile};

use crate::state::AppState;

#[derive(Parser, Debug, Clone)]
#[command(name = "pastry-api")]
#[command(about = "In-memory pastry menu CRUD API")]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "1338")]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Schema profile: `full` requires description and price, `light` has no price
    #[arg(long, env = "PASTRY_PROFILE", default_value = "full")]
    pub profile: SchemaProfile,

    /// Start with an empty menu instead of the seed pastries
    #[arg(long)]
    pub empty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Builds the initial application state these arguments describe.
    pub fn app_state(&self) -> AppState {
        let store = if self.empty {
            PastryStore::new()
        } else {
            PastryStore::seeded(self.profile)
        };
        AppState::new(store, Schema::new(self.profile))
    }
}
