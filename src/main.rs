use std::process::exit;
use std::time::Instant;

use clap::{App, Arg};

use crate::count::count_odd_period_sqrt_continued_fractions;

mod count;
mod error;
mod period;
mod utils;

fn main() {
    let args = App::new("cf-period")
        .version("1.0.0")
        .about("count square roots with an odd-period continued fraction")
        .arg(Arg::new("n")
            .help("the upper bound of the radicands to test")
            .required(true)
            .takes_value(true)
            .short('n')
            .long("n"))
        .arg(Arg::new("thread_num")
            .help("the number of threads to use")
            .takes_value(true)
            .short('t')
            .long("thread_num"));

    let matches = args.get_matches();

    let n = match matches.value_of("n").unwrap().parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("n must be a positive integer");
            exit(1);
        }
    };

    if let Some(t) = matches.value_of("thread_num") {
        let thread_num = match t.parse::<usize>() {
            Ok(t) if t > 0 => t,
            _ => {
                eprintln!("thread_num must be a positive integer");
                exit(1);
            }
        };
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_num)
            .build_global()
        {
            eprintln!("failed to build thread pool: {}", e);
            exit(1);
        }
    }

    let start_time = Instant::now();
    let result = count_odd_period_sqrt_continued_fractions(n);
    let elapsed = start_time.elapsed();

    match result {
        Ok(count) => {
            println!("odd-period square roots for n <= {} : {}", n, count);
            println!("process time: {:?}", elapsed);
        }
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
