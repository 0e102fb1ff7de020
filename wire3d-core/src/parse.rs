/// Parsers for vector-valued arguments such as `"50, 50, 50"`
use nom::{
    character::complete::{char, multispace0},
    combinator::all_consuming,
    number::complete::double,
    sequence::delimited,
    IResult,
};

use crate::error::{Error, Result};
use crate::math::Vec3;

/// Parse three comma separated numbers into a vector.
pub fn parse_vec3(input: &str) -> Result<Vec3> {
    match all_consuming(parse_vec3_impl)(input) {
        Ok((_, v)) => Ok(v),
        Err(e) => Err(parse_error(input, e)),
    }
}

/// Parse two comma separated numbers, e.g. a canvas `"width,height"`.
pub fn parse_extent(input: &str) -> Result<(f64, f64)> {
    match all_consuming(parse_extent_impl)(input) {
        Ok((_, extent)) => Ok(extent),
        Err(e) => Err(parse_error(input, e)),
    }
}

fn parse_error(input: &str, e: nom::Err<nom::error::Error<&str>>) -> Error {
    Error::Parse {
        input: input.to_string(),
        reason: format!("{:?}", e),
    }
}

fn parse_vec3_impl(input: &str) -> IResult<&str, Vec3> {
    let (input, x) = component(input)?;
    let (input, _) = separator(input)?;
    let (input, y) = component(input)?;
    let (input, _) = separator(input)?;
    let (input, z) = component(input)?;
    Ok((input, Vec3::new(x, y, z)))
}

fn parse_extent_impl(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, width) = component(input)?;
    let (input, _) = separator(input)?;
    let (input, height) = component(input)?;
    Ok((input, (width, height)))
}

fn component(input: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0)(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    char(',')(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("50,50,50").unwrap(), Vec3::new(50.0, 50.0, 50.0));
        assert_eq!(
            parse_vec3(" 150, 1.5 ,-1e2 ").unwrap(),
            Vec3::new(150.0, 1.5, -100.0)
        );
    }

    #[test]
    fn test_parse_vec3_rejects_garbage() {
        assert!(matches!(parse_vec3("1,2"), Err(Error::Parse { .. })));
        assert!(matches!(parse_vec3("1,2,3,4"), Err(Error::Parse { .. })));
        assert!(matches!(parse_vec3("x,y,z"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_extent() {
        assert_eq!(parse_extent("10,10").unwrap(), (10.0, 10.0));
        assert_eq!(parse_extent("2.5 , 0.75").unwrap(), (2.5, 0.75));
        assert!(parse_extent("10").is_err());
    }
}
