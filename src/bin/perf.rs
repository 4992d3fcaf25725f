use log::{error, info};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;

use std::{thread, time};

use rbix::{Index, Latch, RbTree};

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    #[structopt(long = "inserts", default_value = "0")]
    inserts: usize,

    #[structopt(long = "removes", default_value = "0")]
    removes: usize,

    #[structopt(long = "finds", default_value = "0")]
    finds: usize,

    #[structopt(long = "writers", default_value = "1")]
    writers: usize,

    #[structopt(long = "readers", default_value = "1")]
    readers: usize,

    #[structopt(long = "rwlock")]
    rwlock: bool,

    #[structopt(long = "validate")]
    validate: bool,

    #[structopt(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    let opts = Opt::from_args();

    let res = TermLogger::init(
        opts.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    if let Err(err) = res {
        println!("logger init failed: {}", err);
    }

    let seed = opts.seed.unwrap_or_else(random);
    info!("seed {}", seed);

    match opts.rwlock {
        true => run::<std::sync::RwLock<RbTree<u64>>>(seed, opts),
        false => run::<std::sync::Mutex<RbTree<u64>>>(seed, opts),
    }
}

fn run<L>(seed: u64, opts: Opt)
where
    L: 'static + Send + Sync + Latch<u64>,
{
    let mut rng = SmallRng::seed_from_u64(seed);

    let index: Index<u64, L> = Index::new("perf");

    // initial load
    let start = time::Instant::now();
    for _i in 0..opts.loads {
        index.insert(rng.gen());
    }
    info!("loaded {} items in {:?}", opts.loads, start.elapsed());

    let mut handles = vec![];
    for j in 0..opts.writers {
        let (mut opts, index) = (opts.clone(), index.clone());
        opts.finds = 0;
        let seed = seed + ((j as u64) * 100);
        let h = thread::spawn(move || do_incremental(j, seed, opts, index));
        handles.push(h);
    }
    for j in opts.writers..(opts.writers + opts.readers) {
        let (mut opts, index) = (opts.clone(), index.clone());
        opts.inserts = 0;
        opts.removes = 0;
        let seed = seed + ((j as u64) * 100);
        let h = thread::spawn(move || do_incremental(j, seed, opts, index));
        handles.push(h);
    }

    for handle in handles.into_iter() {
        if handle.join().is_err() {
            error!("worker thread panicked");
        }
    }

    info!("index {} len:{} height:{}", index.to_name(), index.len(), index.height());

    if opts.validate {
        let start = time::Instant::now();
        match index.validate() {
            Ok(ss) => info!("validated {:?} in {:?}", ss, start.elapsed()),
            Err(err) => error!("validate failed: {}", err),
        }
    }
}

fn do_incremental<L>(j: usize, seed: u64, opts: Opt, index: Index<u64, L>)
where
    L: Latch<u64>,
{
    let mut rng = SmallRng::seed_from_u64(seed);

    let start = time::Instant::now();
    let total = opts.inserts + opts.removes + opts.finds;
    let (mut n_found, mut n_removed) = (0, 0);
    let mut n = total;
    while n > 0 {
        let op = rng.gen::<usize>() % total;

        let key = rng.gen::<u64>();
        if op < opts.inserts {
            index.insert(key);
        } else if op < (opts.inserts + opts.removes) {
            n_removed += if index.remove(&key) { 1 } else { 0 };
        } else {
            n_found += if index.find(&key).is_some() { 1 } else { 0 };
        }
        n -= 1;
    }
    info!(
        "incremental-{} for operations {}, took {:?} removed:{} found:{}",
        j,
        total,
        start.elapsed(),
        n_removed,
        n_found
    );

    let start = time::Instant::now();
    let n = index.to_vec().len();
    info!("iter-{} for iterating {}, took {:?}", j, n, start.elapsed());
}
