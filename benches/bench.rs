use criterion::{criterion_group, criterion_main};

mod checksum_benchmark {
    use criterion::{black_box, Criterion};
    use nordic_ids::{Mod10Checksum, Mod11Checksum, NorwegianCivicChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let mod10_inputs = vec![
            "7907179191",
            "5560360793",
            "8327001234567897",
            "2208319232",
            "12345674",
        ];
        c.bench_function("mod10-checksum", |b| {
            b.iter(|| {
                for input in mod10_inputs.iter() {
                    Mod10Checksum.is_valid_match(black_box(input));
                }
            })
        });

        let mod11_inputs = vec!["0001234560", "95501234566", "6789123456789", "12345678908"];
        c.bench_function("mod11-checksum", |b| {
            b.iter(|| {
                for input in mod11_inputs.iter() {
                    Mod11Checksum.is_valid_match(black_box(input));
                }
            })
        });

        let civic_inputs = vec!["11077941012", "02101935593", "12037674174", "31129900183"];
        c.bench_function("norwegian-civic-checksum", |b| {
            b.iter(|| {
                for input in civic_inputs.iter() {
                    NorwegianCivicChecksum.is_valid_match(black_box(input));
                }
            })
        });
    }
}

mod bank_account_benchmark {
    use criterion::{black_box, BenchmarkId, Criterion};
    use nordic_ids::{BankAccountNo, BankAccountSe, NorwayBankRegistry};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let swedish_accounts = vec![
            ("type1", "5000-1234560"),
            ("type2", "9550-1234566"),
            ("type3", "3300-1922083192-32"),
            ("type4", "6789-123456789"),
            ("swedbank", "83279-1234567897"),
        ];
        let mut group = c.benchmark_group("swedish-bank-account");
        for (name, raw) in swedish_accounts {
            group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
                b.iter(|| BankAccountSe::parse(black_box(raw)))
            });
        }
        group.finish();

        let registry =
            NorwayBankRegistry::from_lines(["1234;;5;Testbanken ASA", "1503;;2;DNB Bank ASA"]);
        c.bench_function("norwegian-bank-account", |b| {
            b.iter(|| BankAccountNo::parse(black_box("1234.56.78908"), &registry))
        });
    }
}

mod national_id_benchmark {
    use chrono::NaiveDate;
    use criterion::{black_box, Criterion};
    use nordic_ids::{
        CivicNumberFi, CivicNumberNo, CivicNumberSe, OrganisationNumberFi, OrganisationNumberNo,
        OrganisationNumberSe, ParseOptions,
    };

    pub fn criterion_benchmark(c: &mut Criterion) {
        let options = ParseOptions::new()
            .guess_year_when_ten_digits(true)
            .reference_date(NaiveDate::from_ymd_opt(2015, 7, 16).unwrap());

        c.bench_function("national-ids", |b| {
            b.iter(|| {
                CivicNumberSe::parse(black_box("19790717-9191"), &options).unwrap();
                CivicNumberSe::parse(black_box("790717-9191"), &options).unwrap();
                OrganisationNumberSe::parse(black_box("556036-0793")).unwrap();
                CivicNumberNo::parse(black_box("11077941012"), &options).unwrap();
                OrganisationNumberNo::parse(black_box("974 760 673")).unwrap();
                CivicNumberFi::parse(black_box("131052-308T")).unwrap();
                OrganisationNumberFi::parse(black_box("0112038-9")).unwrap();
            })
        });
    }
}

criterion_group!(
    benches,
    checksum_benchmark::criterion_benchmark,
    bank_account_benchmark::criterion_benchmark,
    national_id_benchmark::criterion_benchmark
);
criterion_main!(benches);
