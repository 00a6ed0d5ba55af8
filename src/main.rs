use bucket_maps::{find_mode, hash_function_2, ChainingMap, OpenAddressingMap};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::Instant;

fn main() {

    const CAPACITY: usize = 1009;
    const SAMPLE_SIZE: usize = 100000;
    const KEY_LENGTH: usize = 12;

    let mut rng = rand::thread_rng();
    let samples: Vec<String> = (0..SAMPLE_SIZE)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(KEY_LENGTH)
                .map(char::from)
                .collect()
        })
        .collect();

    let mut oa: OpenAddressingMap<usize> = OpenAddressingMap::new(CAPACITY, hash_function_2);
    let mut sc: ChainingMap<usize> = ChainingMap::new(CAPACITY, hash_function_2);

    let now: Instant = Instant::now();
    for (i, key) in samples.iter().enumerate() {
        oa.put(key, i);
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;
    println!("Open addressing: initial capacity {} actual capacity {}", CAPACITY, oa.capacity());
    println!("Open addressing: entries {} load factor {}", oa.size(), oa.table_load());
    println!("Open addressing: avg time to put {}", elapsed as f64 / SAMPLE_SIZE as f64);

    let now: Instant = Instant::now();
    for (i, key) in samples.iter().enumerate() {
        sc.put(key, i);
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;
    println!("Chaining: capacity {} entries {} load factor {}", sc.capacity(), sc.size(), sc.table_load());
    println!("Chaining: avg time to put {}", elapsed as f64 / SAMPLE_SIZE as f64);

    benchmarking::warm_up();
    let lookups = benchmarking::measure_function(|measurer| {
        for key in samples.iter() {
            measurer.measure(|| oa.get(key).copied());
        }
    });
    match lookups {
        Ok(result) => println!("Open addressing: time to get {:?}", result.elapsed()),
        Err(err) => eprintln!("Open addressing: get benchmark failed: {:?}", err),
    }
    let lookups = benchmarking::measure_function(|measurer| {
        for key in samples.iter() {
            measurer.measure(|| sc.get(key).copied());
        }
    });
    match lookups {
        Ok(result) => println!("Chaining: time to get {:?}", result.elapsed()),
        Err(err) => eprintln!("Chaining: get benchmark failed: {:?}", err),
    }

    for key in samples.iter() {
        if oa.get(key).is_none() || sc.get(key).is_none() {
            panic!("Failed to get key {}", key);
        }
    }

    // Bucket the first character of every key and report the most common ones.
    let initials: Vec<String> = samples.iter().map(|key| key[..1].to_owned()).collect();
    let (modes, frequency) = find_mode(&initials);
    println!("Most common initial(s) {:?} seen {} times", modes, frequency);

    let now: Instant = Instant::now();
    for key in samples.iter() {
        oa.remove(key);
        sc.remove(key);
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;
    println!("Entries after remove: open addressing {} chaining {}", oa.size(), sc.size());
    println!("Open addressing tombstones {} empty buckets {}", oa.tombstones(), oa.empty_buckets());
    println!("Avg time to remove from both {}", elapsed as f64 / SAMPLE_SIZE as f64);

}
