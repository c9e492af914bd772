use typed_flags::{Flag, FlagValue, FlagsError, Identity, TypedFlags, bit_layout};

#[derive(Flag)]
struct HasTail;
#[derive(Flag)]
struct EatsMeat;
#[derive(Flag)]
struct EatsGrass;
#[derive(Flag)]
struct BuildsSpaceships;

type Animal = TypedFlags<(EatsMeat, EatsGrass, HasTail)>;
type Human = TypedFlags<(EatsMeat, EatsGrass, BuildsSpaceships)>;

fn animal(src: &str) -> Animal {
    src.parse().unwrap()
}

#[test]
fn empty_set() {
    let empty = TypedFlags::<()>::new();
    assert_eq!(empty.size(), 0);
    assert_eq!(size_of::<TypedFlags<()>>(), 0);
    assert_eq!(empty.to_integral::<i32>(), 0);
    assert!(empty.none_of::<()>());
    assert!(!empty.any_of::<()>());
    assert!(empty.all_of::<()>());
    assert_eq!(TypedFlags::<()>::from_integral(1).to_integral::<i32>(), 0);
    assert_eq!(empty.to_string(), "");
}

#[test]
fn positions_follow_declaration() {
    assert_eq!(Animal::index::<EatsMeat>(), 0);
    assert_eq!(Animal::index::<EatsGrass>(), 1);
    assert_eq!(Animal::index::<HasTail>(), 2);
    assert_eq!(Human::index::<BuildsSpaceships>(), 2);
}

#[test]
fn single_flag_access() {
    let mut wolf = Animal::new();
    assert_eq!(wolf.size(), 3);
    assert_eq!(size_of::<Animal>(), 1);
    assert!(!wolf.test::<EatsMeat>());
    assert!(!wolf.test::<EatsGrass>());
    assert!(!wolf.test::<HasTail>());
    assert_eq!(wolf.to_string(), "000");

    wolf.set::<EatsMeat>(true);
    assert!(wolf.test::<EatsMeat>());
    assert_eq!(wolf.to_string(), "001");

    wolf.set::<EatsGrass>(true);
    assert_eq!(wolf.to_string_with('-', '1'), "-11");
    wolf.set::<EatsGrass>(false);
    assert!(!wolf.test::<EatsGrass>());

    wolf.set::<HasTail>(true);
    assert_eq!(wolf.to_integral::<i32>(), 5);
    assert_eq!(wolf.to_string_with('-', '+'), "+-+");
}

#[test]
fn whole_set_operations() {
    let mut unknown = Animal::new();
    assert!(unknown.none());
    assert!(!unknown.any());
    assert!(!unknown.all());

    unknown.set_all();
    assert_eq!(unknown.to_integral::<i32>(), 7);
    assert!(unknown.any());
    assert!(unknown.all());

    let mut tmp = unknown;
    tmp.reset::<(EatsMeat, EatsGrass, HasTail)>();
    assert_ne!(tmp, unknown);
    unknown.reset_all();
    assert_eq!(tmp, unknown);
    assert!(unknown.none());
}

#[test]
fn selection_queries() {
    let mut engineer = Human::new();
    assert!(engineer.none_of::<EatsMeat>());
    assert!(engineer.none_of::<(EatsMeat, EatsGrass, BuildsSpaceships)>());
    assert!(!engineer.any_of::<(EatsMeat, EatsGrass)>());
    assert!(!engineer.all_of::<EatsMeat>());

    engineer.set::<BuildsSpaceships>(true);
    assert_eq!(engineer.to_integral::<i32>(), 4);
    assert!(engineer.none_of::<(EatsMeat, EatsGrass)>());
    assert!(!engineer.none_of::<(EatsMeat, EatsGrass, BuildsSpaceships)>());
    assert!(engineer.any_of::<(EatsMeat, EatsGrass, BuildsSpaceships)>());
    assert!(!engineer.all_of::<(EatsMeat, EatsGrass, BuildsSpaceships)>());

    engineer.flip::<(EatsMeat, EatsGrass, BuildsSpaceships)>();
    assert!(engineer.all_of::<(EatsMeat, EatsGrass)>());
    assert!(!engineer.all_of::<(EatsMeat, EatsGrass, BuildsSpaceships)>());

    engineer.flip_all();
    assert!(!engineer.test::<EatsMeat>());
    assert!(!engineer.test::<EatsGrass>());
    assert!(engineer.test::<BuildsSpaceships>());
    assert_eq!(engineer.to_integral::<i32>(), 4);
}

#[test]
fn operators() {
    let mut unknown = Animal::from_integral(65535);
    assert_eq!(unknown.to_integral::<i32>(), 7);
    unknown = !unknown;
    assert_eq!(unknown.to_integral::<i32>(), 0);
    unknown |= Animal::from_integral(2);
    assert_eq!(unknown.to_integral::<i32>(), 2);
    unknown ^= Animal::from_integral(7);
    assert_eq!(unknown.to_integral::<i32>(), 5);
    unknown &= Animal::from_integral(4);
    assert_eq!(unknown.to_integral::<i32>(), 4);

    assert_eq!((animal("111") & animal("010")).to_string(), "010");
    assert_eq!((animal("11100") | animal("11001")).to_string(), "101");
    assert_eq!((animal("10") ^ animal("11")).to_string(), "001");
}

#[test]
fn values_in_and_out() {
    let mut rabbit = Animal::new();
    rabbit.set::<(EatsGrass, HasTail)>(true);
    assert_eq!(rabbit.to_integral::<i32>(), 6);

    let mut unknown = Animal::from_values((
        FlagValue::<HasTail>::new(true),
        FlagValue::<EatsGrass>::new(true),
    ));
    assert_eq!(unknown, rabbit);

    unknown.set_values(FlagValue::<EatsMeat>::new(true));
    assert_ne!(unknown, rabbit);
    unknown.set_values((
        FlagValue::<EatsMeat>::new(false),
        FlagValue::<EatsGrass>::new(true),
    ));
    assert_eq!(unknown, rabbit);

    let mut values = (
        FlagValue::<EatsMeat>::default(),
        FlagValue::<EatsGrass>::default(),
        FlagValue::<HasTail>::default(),
    );
    unknown.get_values(&mut values);
    assert!(!values.0.get());
    assert!(values.1.get());
    assert!(values.2.get());
}

#[test]
fn parse_rejects_foreign_characters() {
    assert_eq!(
        "X".parse::<Animal>(),
        Err(FlagsError::InvalidCharacter {
            character: 'X',
            index: 0
        })
    );
    assert_eq!(
        Animal::parse_with("+-+", None, '-', '+').map(|a| a.to_integral::<u8>()),
        Ok(5)
    );
    assert_eq!(
        Animal::parse_with("+--+", Some(3), '-', '+').map(|a| a.to_integral::<u8>()),
        Ok(4)
    );
}

#[derive(Flag)]
struct F1;
#[derive(Flag)]
struct F2;
#[derive(Flag)]
struct F3;
#[derive(Flag)]
struct F4;
#[derive(Flag)]
struct F5;
#[derive(Flag)]
struct F6;
#[derive(Flag)]
struct F7;
#[derive(Flag)]
struct F8;
#[derive(Flag)]
struct F9;

#[test]
fn byte_boundaries() {
    let mut flags8 = TypedFlags::<(F1, F2, F3, F4, F5, F6, F7, F8)>::new();
    assert_eq!(flags8.size(), 8);
    assert_eq!(size_of_val(&flags8), 1);
    flags8.set::<F8>(true);
    assert_eq!(flags8.to_integral::<i32>(), 128);
    assert_eq!(flags8.to_string(), "10000000");

    let mut flags9 = TypedFlags::<(F1, F2, F3, F4, F5, F6, F7, F8, F9)>::new();
    assert_eq!(flags9.size(), 9);
    assert_eq!(size_of_val(&flags9), 2);
    flags9.set::<(F1, F9)>(true);
    assert_eq!(flags9.to_integral::<i32>(), 257);
    assert_eq!(flags9.to_string(), "100000001");
    flags9.flip_all();
    assert_eq!(flags9.count(), 7);
}

#[test]
fn copies_are_independent() {
    let mut wolf = Animal::new();
    wolf.set::<EatsMeat>(true);
    let mut copy = wolf;
    copy.set::<HasTail>(true);
    assert!(!wolf.test::<HasTail>());
    assert_eq!(copy.to_integral::<u8>(), 0b101);
}

#[test]
fn iteration_names_set_flags() {
    let rabbit = animal("110");
    let names: Vec<_> = rabbit.iter().map(|id| id.name()).collect();
    assert_eq!(names.len(), 2);
    assert!(names[0].ends_with("::EatsGrass"));
    assert!(names[1].ends_with("::HasTail"));

    let debug = format!("{:?}", rabbit);
    assert!(debug.starts_with("TypedFlags(110 {"));
}

#[derive(Flag)]
#[flag(name = "shared")]
struct Declared;
#[derive(Flag)]
#[flag(name = "shared")]
struct Lookalike;

#[test]
fn shared_names_do_not_merge_flags() {
    assert_eq!(Declared::ID.name(), Lookalike::ID.name());
    assert_ne!(Declared::ID, Lookalike::ID);

    let mut flags = TypedFlags::<(Declared, Lookalike)>::new();
    flags.set::<Lookalike>(true);
    assert!(!flags.test::<Declared>());
    assert_eq!(flags.to_integral::<u8>(), 0b10);
}

fn local_identity() -> Identity {
    #[derive(Flag)]
    struct Local;
    Local::ID
}

fn index_beside<Outer: Flag>() -> usize {
    #[derive(Flag)]
    struct Local;

    let mut flags = TypedFlags::<(Outer, Local)>::new();
    flags.set::<Local>(true);
    assert!(!flags.test::<Outer>());
    TypedFlags::<(Outer, Local)>::index::<Local>()
}

#[test]
fn same_named_local_types_stay_apart() {
    #[derive(Flag)]
    struct Local;

    assert_eq!(Local::ID.name(), local_identity().name());
    assert_ne!(Local::ID, local_identity());
    assert_eq!(index_beside::<Local>(), 1);
}

#[derive(Flag)]
#[flag(name = "reg.enable")]
struct Enable;
#[derive(Flag)]
#[flag(name = "reg.fault")]
struct Fault;

bit_layout! {
    Status: 12 {
        Enable = 0,
        Fault = 11,
    }
}

#[test]
fn explicit_layout() {
    type Reg = TypedFlags<Status>;
    assert_eq!(Reg::index::<Fault>(), 11);
    assert_eq!(size_of::<Reg>(), 2);

    let mut reg = Reg::from_integral(0x0F0u16);
    reg.set::<(Enable, Fault)>(true);
    assert_eq!(reg.to_integral::<u16>(), 0x8F1);
    assert_eq!(reg.count(), 6);

    let names: Vec<_> = reg.iter().map(|id| id.name()).collect();
    assert_eq!(names, ["reg.enable", "reg.fault"]);

    reg.reset::<()>();
    assert!(reg.none());
    reg.flip::<()>();
    assert!(reg.all());
    assert_eq!(reg.to_string(), "111111111111");
}
