use vonage_sms::{MessageType, requires_unicode_encoding};

fn main() {
    let samples = [
        "Hello World",
        "Heizölrückstoßabdämpfung",
        "Testing 💪 👌",
        "いろはにほへとちりぬるを",
        "El pingüino Wenceslao hizo kilómetros bajo exhaustiva lluvia y frío",
    ];

    for sample in samples {
        println!(
            "{:50} requires_unicode={:5} type={}",
            sample,
            requires_unicode_encoding(sample),
            MessageType::detect(sample).as_wire_str()
        );
    }
}
