use legsplit::engine::{parse_amount, Precision};
use legsplit::host::Response;

use crate::cmd::SplitArgs;
use crate::exit::{request_error, CliResult, SUCCESS};
use crate::output::{print_split, OutputFormat};

pub fn run(args: SplitArgs, format: OutputFormat) -> CliResult<i32> {
    let precision = Precision::clamped(args.decimals);
    let balance =
        parse_amount(&args.balance).map_err(|err| request_error("invalid balance", err.into()))?;

    let result = legsplit::engine::split(balance, precision)
        .map_err(|err| request_error("split failed", err.into()))?;
    let response = Response::from_split(&result, precision)
        .map_err(|err| request_error("split failed", err))?;

    print_split(&result, &response, format);
    Ok(SUCCESS)
}
