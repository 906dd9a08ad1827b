use std::env;
use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};
use log::info;

use cluster_rsa::bigint::BigInteger;
use cluster_rsa::rsa::{self, AsciiEncoder, KeyGenConfig, PrivateKey, PublicKey};
use cluster_rsa::util::{run_file, BatchConfig};

const USAGE: &str = "\
usage: cluster_rsa [command]

commands:
  demo                      run the built-in encryption demo (default)
  keygen [digits]           generate a key pair from primes of the given digit count
  encrypt <n> <e> <m>       print m^e mod n
  decrypt <n> <d> <c>       print c^d mod n
  batch <file> [--fail-fast]
                            check every case listed in a batch file";

fn main() {
    env_logger::init();

    if let Err(e) = run(env::args().skip(1).collect()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<()> {
    let command = args.first().map(String::as_str).unwrap_or("demo");
    let rest = args.get(1..).unwrap_or(&[]);

    match command {
        "demo" => demo(),
        "keygen" => keygen(rest),
        "encrypt" => {
            let [n, e, m] = integers::<3>(rest)?;
            println!("{}", rsa::encrypt(&n, &e, &m)?);
            Ok(())
        }
        "decrypt" => {
            let [n, d, c] = integers::<3>(rest)?;
            println!("{}", rsa::decrypt(&n, &d, &c)?);
            Ok(())
        }
        "batch" => batch(rest),
        "help" | "-h" | "--help" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("unknown command {:?}\n\n{}", other, USAGE),
    }
}

fn integers<const N: usize>(args: &[String]) -> Result<[BigInteger; N]> {
    if args.len() != N {
        bail!("expected {} integer arguments, got {}\n\n{}", N, args.len(), USAGE);
    }

    let mut values: [BigInteger; N] = std::array::from_fn(|_| BigInteger::default());
    for (slot, text) in values.iter_mut().zip(args) {
        *slot = text
            .parse::<BigInteger>()
            .with_context(|| format!("invalid integer {:?}", text))?;
    }
    Ok(values)
}

fn keygen(args: &[String]) -> Result<()> {
    let mut config = KeyGenConfig::default();
    if let Some(digits) = args.first() {
        let digits = digits
            .parse::<usize>()
            .with_context(|| format!("invalid digit count {:?}", digits))?;
        config = config.with_prime_digits(digits);
    }

    info!("generating key pair with {}-digit primes", config.prime_digits);
    let keypair = rsa::generate_keypair(&config)?;

    print_title("Generate key");
    print_record("PUBLIC KEY", &keypair.public_key.to_string());
    print_record("PRIVATE KEY", &keypair.private_key.to_string());
    Ok(())
}

fn batch(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("batch needs a file path\n\n{}", USAGE);
    };
    let fail_fast = args.iter().skip(1).any(|arg| arg == "--fail-fast");

    let config = BatchConfig::default().with_fail_fast(fail_fast);
    let report = run_file(Path::new(path), &config).with_context(|| format!("running batch {}", path))?;

    for failure in &report.failures {
        println!(
            "line {}: {} expected {}, got {}",
            failure.line, failure.operation, failure.expected, failure.actual
        );
    }
    println!("{} of {} cases passed", report.passed, report.total());

    if !report.is_success() {
        bail!("{} case(s) failed", report.failures.len());
    }
    Ok(())
}

fn demo() -> Result<()> {
    let n: BigInteger = "3658315382137043".parse()?;
    let public_key = PublicKey::new("17".parse()?, n.clone());
    let private_key = PrivateKey::new("3012726845747393".parse()?, n);

    // Number encryption
    let message: BigInteger = "123456".parse()?;
    let encrypted = public_key.encrypt(&message)?;
    let decrypted = private_key.decrypt(&encrypted)?;
    print_case(
        "#1. Number Encryption",
        &message.to_string(),
        &public_key,
        &encrypted,
        &private_key,
        &decrypted.to_string(),
    );

    // String encryption
    let text = "MMMMY";
    let encrypted = public_key.encrypt_text(text, &AsciiEncoder)?;
    let decrypted = private_key.decrypt_text(&encrypted, &AsciiEncoder)?;
    print_case("#2. String Encryption", text, &public_key, &encrypted, &private_key, &decrypted);

    // Key generation
    keygen(&[])
}

fn print_case(
    title: &str,
    message: &str,
    public_key: &PublicKey,
    encrypted: &BigInteger,
    private_key: &PrivateKey,
    decrypted: &str,
) {
    print_title(title);
    print_record("MESSAGE", message);
    print_record("PUBLIC KEY", &public_key.to_string());
    print_record("ENCRYPTION", &format!("Encrypted Message: {}", encrypted));
    print_record("PRIVATE KEY", &private_key.to_string());
    print_record("DECRYPTION", &format!("Decrypted Message: {}", decrypted));
}

fn print_title(title: &str) {
    println!();
    println!("        {}", title);
    println!();
}

fn print_record(label: &str, value: &str) {
    println!("        {:<16}{}", format!("[{}]", label), value);
    println!();
}
