use legsplit::engine::{DEFAULT_DECIMALS, MAX_DECIMALS};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("legsplit {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: legsplit");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("LEGSPLIT_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("protocol: native-messaging (u32 LE length + UTF-8 JSON)");
    println!("decimals: default={DEFAULT_DECIMALS}, max={MAX_DECIMALS}");

    Ok(SUCCESS)
}
