use typed_flags::{Flag, FlagValue, TypedFlags, bit_layout};

#[derive(Flag)]
struct EatsMeat;
#[derive(Flag)]
struct EatsGrass;
#[derive(Flag)]
struct HasTail;
#[derive(Flag)]
struct BuildsSpaceships;

type Animal = TypedFlags<(EatsMeat, EatsGrass, HasTail)>;
type Engineer = TypedFlags<(EatsMeat, EatsGrass, BuildsSpaceships)>;

fn main() {
    println!("=== Typed Flags Examples ===\n");

    // Example 1: Building and testing flags
    example_animals();

    // Example 2: Integer and string conversions
    let _ = example_conversions();

    // Example 3: Register with fixed bit positions
    example_register();
}

fn example_animals() {
    println!("Example 1: Animals");

    let mut wolf = Animal::new();
    wolf.set::<EatsGrass>(false);
    wolf.set::<(EatsMeat, HasTail)>(true);

    // same thing, from values
    let same = Animal::from_values((
        FlagValue::<HasTail>::new(true),
        FlagValue::<EatsMeat>::new(true),
        FlagValue::<EatsGrass>::new(false),
    ));
    assert_eq!(wolf, same);

    println!("  Wolf eats meat and has a tail: {}", wolf.all_of::<(EatsMeat, HasTail)>());
    println!("  Wolf eats grass: {}", wolf.any_of::<EatsGrass>());

    let mut values = (FlagValue::<EatsMeat>::default(), FlagValue::<EatsGrass>::default());
    wolf.get_values(&mut values);
    println!("  Extracted: {:?}", values);

    let mut engineer = Engineer::new();
    engineer.set::<BuildsSpaceships>(true);
    println!("  Engineer: {:?}", engineer);
    println!("  Size of Animal: {} byte", core::mem::size_of::<Animal>());
    println!();
}

fn example_conversions() -> Result<(), typed_flags::FlagsError> {
    println!("Example 2: Conversions");

    let a1 = Animal::from_integral(3u8);
    let a2: Animal = "101".parse()?;
    println!("  from 3     -> {}", a1);
    println!("  from \"101\" -> {} ({})", a2, a2.to_integral::<u32>());
    println!("  a1 & a2    -> {}", a1 & a2);
    println!("  a1 | a2    -> {:#b}", a1 | a2);
    println!("  !a1        -> {}", (!a1).to_string_with('.', '#'));

    match "1Y0".parse::<Animal>() {
        Ok(_) => println!("  unexpected success"),
        Err(err) => println!("  rejected: {}", err),
    }
    println!();

    Ok(())
}

#[derive(Flag)]
struct Enable;
#[derive(Flag)]
struct Interrupt;
#[derive(Flag)]
struct Overrun;

bit_layout! {
    /// Status register of a serial port.
    Uart: 8 {
        Enable = 0,
        Interrupt = 3,
        Overrun = 7,
    }
}

fn example_register() {
    println!("Example 3: Register layout");

    let mut uart = TypedFlags::<Uart>::from_integral(0x40u8);
    uart.set::<(Enable, Overrun)>(true);
    println!("  Overrun bit: {}", TypedFlags::<Uart>::index::<Overrun>());
    println!("  Register: {:#04x}", uart.to_integral::<u8>());
    for id in &uart {
        println!("  set: {}", id);
    }
}
