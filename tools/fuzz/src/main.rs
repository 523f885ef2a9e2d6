use afl::fuzz;
use nordic_ids::{
    BankAccount, BankAccountNo, BankAccountSe, CivicNumberFi, CivicNumberNo, CivicNumberSe,
    DateOfBirthSe, NationalIdentifier, NorwayBankRegistry, OrganisationNumberFi,
    OrganisationNumberNo, OrganisationNumberSe, ParseOptions,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SEPARATORS: [char; 4] = [' ', '-', '.', ','];

#[cfg(not(feature = "manual_test"))]
fn main() {
    let registry = test_registry();
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data, &registry);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let registry = test_registry();
    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input, &registry);
}

fn test_registry() -> NorwayBankRegistry {
    NorwayBankRegistry::from_lines(["1234;;5;Testbanken ASA", "1503;;2;DNB Bank ASA"])
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b'|')?;
    Some((&input[0..i], &input[i + 1..]))
}

fn run_raw_fuzz(bytes: &[u8], registry: &NorwayBankRegistry) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input, registry, rng);
    Some(())
}

/// Sprinkles separators into the input. Account numbers must not care.
fn with_separators(input: &str, rng: &mut StdRng) -> String {
    let mut output = String::new();
    for c in input.chars() {
        if rng.gen_bool(0.2) {
            output.push(SEPARATORS[rng.gen_range(0..SEPARATORS.len())]);
        }
        output.push(c);
    }
    output
}

fn run_fuzz(input: &str, registry: &NorwayBankRegistry, mut rng: StdRng) {
    let options = ParseOptions::new()
        .guess_year_when_ten_digits(rng.gen_bool(0.5))
        .strict_birth_date(rng.gen_bool(0.5));

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Options: {:?}", options);
    }

    if let Ok(account) = BankAccountSe::parse(input) {
        let again = BankAccountSe::parse(&account.canonical()).unwrap();
        assert_eq!(account.canonical(), again.canonical());

        let separated = with_separators(input, &mut rng);
        assert_eq!(BankAccountSe::parse(&separated).ok(), Some(account));
    }

    if let Ok(account) = BankAccountNo::parse(input, registry) {
        let again = BankAccountNo::parse(&account.canonical(), registry).unwrap();
        assert_eq!(account, again);
    }

    if let Ok(number) = CivicNumberSe::parse(input, &options) {
        let again = CivicNumberSe::parse(number.normal_form(), &options).unwrap();
        assert_eq!(number, again);
        assert_eq!(number.ten_digit_normal_form().len(), 10);
    }

    check_idempotent(OrganisationNumberSe::parse(input), OrganisationNumberSe::parse);
    check_idempotent(DateOfBirthSe::parse(input), DateOfBirthSe::parse);
    check_idempotent(OrganisationNumberNo::parse(input), OrganisationNumberNo::parse);
    check_idempotent(CivicNumberFi::parse(input), CivicNumberFi::parse);
    check_idempotent(OrganisationNumberFi::parse(input), OrganisationNumberFi::parse);

    if let Ok(number) = CivicNumberNo::parse(input, &options) {
        let again = CivicNumberNo::parse(number.normal_form(), &options).unwrap();
        assert_eq!(number, again);
    }
}

fn check_idempotent<T, E>(parsed: Result<T, E>, parse: fn(&str) -> Result<T, E>)
where
    T: NationalIdentifier + PartialEq + std::fmt::Debug,
    E: std::fmt::Debug,
{
    if let Ok(value) = parsed {
        let again = parse(value.normal_form()).unwrap();
        assert_eq!(value, again);
    }
}
