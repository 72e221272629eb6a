use stack_tools::literals::*;
use stack_tools::*;

const fn banner() -> OversizedArray<u8> {
    let mut text = OversizedArray::from_text("stack_tools ");
    text.push_str(env!("CARGO_PKG_VERSION"));
    text
}

fn main() {
    println!("{}", to_static_str!(banner()));

    let mut names = stack_vec![4; "alpha".to_owned(), "beta".to_owned()];
    names.push("gamma".to_owned()).unwrap();
    println!("{names:?} ({} of {})", names.len(), names.capacity());

    if let Err(err) = names.resize(8) {
        println!("rejected: {err}");
    }

    let mut counter = npu8(250);
    for _ in 0..10 {
        counter.increment();
    }
    println!("u8 counter after 10 increments from 250: {counter}");

    let flags = npu16(0b1010) | npu16(0b0101);
    println!("flags: {:#06x}", (flags << 4u8).get());
}
