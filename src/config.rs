
use crate::{Error, Result};
use std::{env, net::SocketAddr, str::FromStr, sync::OnceLock};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DUMMY_COUNT: &str = "1000";

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
#[derive(Debug)]
pub struct Config {
    pub BIND_ADDR: SocketAddr,
    pub DUMMY_COUNT: u32,
}

impl Config {
    pub fn load_from_env() -> Result<Config> {
        Ok(Config {
            BIND_ADDR: get_env_parse_or("SERVICE_BIND_ADDR", DEFAULT_BIND_ADDR)?,
            DUMMY_COUNT: get_env_parse_or("SERVICE_DUMMY_COUNT", DEFAULT_DUMMY_COUNT)?,
        })
    }
}

fn get_env_parse_or<T: FromStr>(name: &'static str, default: &str) -> Result<T> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    parse_env(name, &raw)
}

fn parse_env<T: FromStr>(name: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse::<T>().map_err(|_| Error::ConfigWrongFormat(name))
}
