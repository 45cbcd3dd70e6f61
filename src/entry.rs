use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use url::Url;

use crate::args::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUESTS, DEFAULT_REQUEST_TIMEOUT, LoadArgs, PositiveU64,
};
use crate::config::{DurationValue, load_config};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::http::build_client;
use crate::payload::PayloadSpec;

/// Fully resolved run parameters: CLI over config file over defaults.
pub(crate) struct RunPlan {
    pub(crate) endpoint: Url,
    pub(crate) requests: u64,
    pub(crate) tag: Option<String>,
    pub(crate) seed: Option<u64>,
    pub(crate) request_timeout: Duration,
    pub(crate) connect_timeout: Duration,
}

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(plan))
}

fn parse_args() -> AppResult<LoadArgs> {
    let cmd = LoadArgs::command();
    let matches = cmd.get_matches();
    Ok(LoadArgs::from_arg_matches(&matches)?)
}

fn build_plan(args: LoadArgs) -> AppResult<RunPlan> {
    let LoadArgs {
        endpoint,
        requests,
        tag,
        seed,
        request_timeout,
        connect_timeout,
        config: config_path,
        verbose: _,
        no_color: _,
    } = args;

    let config = load_config(config_path.as_deref())?.unwrap_or_default();

    let Some(endpoint) = endpoint.or(config.endpoint) else {
        print_usage()?;
        return Err(AppError::validation(ValidationError::MissingEndpoint));
    };
    let endpoint = Url::parse(&endpoint).map_err(|err| {
        AppError::validation(ValidationError::InvalidEndpoint {
            url: endpoint,
            source: err,
        })
    })?;

    Ok(RunPlan {
        endpoint,
        requests: resolve_requests(requests, config.requests)?,
        tag: tag.or(config.tag),
        seed: seed.or(config.seed),
        request_timeout: resolve_duration(
            request_timeout,
            config.timeout.as_ref(),
            "timeout",
            DEFAULT_REQUEST_TIMEOUT,
        )?,
        connect_timeout: resolve_duration(
            connect_timeout,
            config.connect_timeout.as_ref(),
            "connect_timeout",
            DEFAULT_CONNECT_TIMEOUT,
        )?,
    })
}

fn resolve_requests(flag: Option<PositiveU64>, file: Option<u64>) -> AppResult<u64> {
    if let Some(requests) = flag {
        return Ok(requests.get());
    }
    let Some(requests) = file else {
        return Ok(DEFAULT_REQUESTS);
    };
    let requests = PositiveU64::try_from(requests).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: "requests".to_owned(),
            source: err,
        })
    })?;
    Ok(requests.get())
}

fn resolve_duration(
    flag: Option<Duration>,
    file: Option<&DurationValue>,
    field: &'static str,
    fallback: Duration,
) -> AppResult<Duration> {
    if let Some(duration) = flag {
        return Ok(duration);
    }
    let Some(value) = file else {
        return Ok(fallback);
    };
    value.to_duration().map_err(|err| {
        AppError::config(ConfigError::InvalidDuration {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn print_usage() -> AppResult<()> {
    let mut cmd = LoadArgs::command();
    cmd.print_help()?;
    println!();
    Ok(())
}

async fn run_async(plan: RunPlan) -> AppResult<()> {
    let RunPlan {
        endpoint,
        requests,
        tag,
        seed,
        request_timeout,
        connect_timeout,
    } = plan;

    let client = build_client(request_timeout, connect_timeout)?;
    let spec = PayloadSpec::new(tag)?;
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    debug!("Sending {} requests to {}", requests, endpoint);

    let mut stdout = std::io::stdout();
    crate::runner::run_load(&client, &endpoint, requests, &spec, &mut rng, &mut stdout).await
}
