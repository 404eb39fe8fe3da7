use criterion::{Criterion, criterion_group, criterion_main};
use fastspell::{Config, SpellCorrector};

fn bench_suggest_string(c: &mut Criterion) {
    let dictionary = "apple awoken cat desk inspiration keep spelling sentence tomato \
                      misspelled words used testing the spell checker functionality";

    let spell_corrector = SpellCorrector::from_words(dictionary.split_whitespace(), Config::default())
        .expect("default configuration is valid");

    let text_content = "ThIs sntence has some mIsspeeled wirds. It is uuseed for tasting the SPELL checkker fanctionality.".to_string();

    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect();

    c.bench_function("suggest_combined_errors", |b| {
        b.iter(|| spell_corrector.suggest("InnSpERataen"))
    });

    c.bench_function("suggest_no_suggestion", |b| {
        b.iter(|| spell_corrector.suggest("zzzxxxqqq"))
    });

    c.bench_function("suggest_words", |b| {
        b.iter(|| {
            let _ = spell_corrector.suggest_word_corrections(&words);
        })
    });
}

criterion_group!(benches, bench_suggest_string);
criterion_main!(benches);
