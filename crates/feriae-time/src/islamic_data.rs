//! Hijri year table.
//!
//! One row per Hijri year: `(hijri_year, gregorian_year, month, day,
//! month_mask)`.  The Gregorian triple is the date of 1 Muharram; bit `i` of
//! `month_mask` is set when Hijri month `i + 1` has 30 days, otherwise it
//! has 29.
//!
//! Month starts follow the Umm al-Qura convention as estimated from the
//! geocentric conjunction time at Mecca, corrected where the published
//! calendar differs.

pub(crate) const FIRST_HIJRI_YEAR: u16 = 1343;

pub(crate) const HIJRI_YEARS: [(u16, u16, u8, u8, u16); 158] = [
    (1343, 1924, 8, 2, 0b101010101010),
    (1344, 1925, 7, 22, 0b100101010101),
    (1345, 1926, 7, 11, 0b001010101101),
    (1346, 1927, 6, 30, 0b010101101101),
    (1347, 1928, 6, 19, 0b101011101010),
    (1348, 1929, 6, 9, 0b010111010100),
    (1349, 1930, 5, 29, 0b110111001001),
    (1350, 1931, 5, 19, 0b110110010010),
    (1351, 1932, 5, 7, 0b101010101010),
    (1352, 1933, 4, 26, 0b010101010110),
    (1353, 1934, 4, 15, 0b101010110101),
    (1354, 1935, 4, 5, 0b010110110100),
    (1355, 1936, 3, 24, 0b101110101001),
    (1356, 1937, 3, 14, 0b011101010010),
    (1357, 1938, 3, 3, 0b011100100101),
    (1358, 1939, 2, 20, 0b011001001011),
    (1359, 1940, 2, 9, 0b110010010111),
    (1360, 1941, 1, 29, 0b100101010110),
    (1361, 1942, 1, 18, 0b101010110110),
    (1362, 1943, 1, 8, 0b010110110100),
    (1363, 1943, 12, 28, 0b110110100101),
    (1364, 1944, 12, 17, 0b110101001010),
    (1365, 1945, 12, 6, 0b110010010101),
    (1366, 1946, 11, 25, 0b100100101101),
    (1367, 1947, 11, 14, 0b001001011101),
    (1368, 1948, 11, 2, 0b010101011101),
    (1369, 1949, 10, 23, 0b101011011010),
    (1370, 1950, 10, 13, 0b011011010100),
    (1371, 1951, 10, 2, 0b011010100101),
    (1372, 1952, 9, 20, 0b010100101011),
    (1373, 1953, 9, 9, 0b001001011011),
    (1374, 1954, 8, 29, 0b010010110111),
    (1375, 1955, 8, 19, 0b100101110110),
    (1376, 1956, 8, 8, 0b001101110100),
    (1377, 1957, 7, 28, 0b101101101001),
    (1378, 1958, 7, 18, 0b011101010010),
    (1379, 1959, 7, 7, 0b011010100101),
    (1380, 1960, 6, 25, 0b010101001101),
    (1381, 1961, 6, 14, 0b101001101101),
    (1382, 1962, 6, 4, 0b001011011010),
    (1383, 1963, 5, 24, 0b010111011001),
    (1384, 1964, 5, 13, 0b110111010010),
    (1385, 1965, 5, 3, 0b110110100100),
    (1386, 1966, 4, 22, 0b110101001010),
    (1387, 1967, 4, 11, 0b101010010101),
    (1388, 1968, 3, 30, 0b010100101101),
    (1389, 1969, 3, 19, 0b101010101101),
    (1390, 1970, 3, 9, 0b010101101010),
    (1391, 1971, 2, 26, 0b101101100101),
    (1392, 1972, 2, 16, 0b011101001001),
    (1393, 1973, 2, 4, 0b111010010011),
    (1394, 1974, 1, 25, 0b010100101010),
    (1395, 1975, 1, 13, 0b101001010111),
    (1396, 1976, 1, 3, 0b010010110110),
    (1397, 1976, 12, 22, 0b101010110101),
    (1398, 1977, 12, 12, 0b010110101010),
    (1399, 1978, 12, 1, 0b110101010101),
    (1400, 1979, 11, 21, 0b110100101010),
    (1401, 1980, 11, 9, 0b101001010101),
    (1402, 1981, 10, 29, 0b010010101101),
    (1403, 1982, 10, 18, 0b100101011101),
    (1404, 1983, 10, 8, 0b001010111010),
    (1405, 1984, 9, 26, 0b100110110101),
    (1406, 1985, 9, 16, 0b010110101010),
    (1407, 1986, 9, 5, 0b110101010101),
    (1408, 1987, 8, 26, 0b110010101010),
    (1409, 1988, 8, 14, 0b100101010110),
    (1410, 1989, 8, 3, 0b001010110110),
    (1411, 1990, 7, 23, 0b010101110101),
    (1412, 1991, 7, 13, 0b101011101010),
    (1413, 1992, 7, 2, 0b011011101000),
    (1414, 1993, 6, 21, 0b011011001001),
    (1415, 1994, 6, 10, 0b010110010101),
    (1416, 1995, 5, 30, 0b110010101011),
    (1417, 1996, 5, 19, 0b010101011010),
    (1418, 1997, 5, 8, 0b101011011010),
    (1419, 1998, 4, 28, 0b010111010100),
    (1420, 1999, 4, 17, 0b101110101001),
    (1421, 2000, 4, 6, 0b101110100010),
    (1422, 2001, 3, 26, 0b101101000101),
    (1423, 2002, 3, 15, 0b101001010101),
    (1424, 2003, 3, 4, 0b010010101011),
    (1425, 2004, 2, 21, 0b011001011011),
    (1426, 2005, 2, 10, 0b101101011010),
    (1427, 2006, 1, 31, 0b011011010100),
    (1428, 2007, 1, 20, 0b111010100101),
    (1429, 2008, 1, 10, 0b111010001010),
    (1430, 2008, 12, 29, 0b110100010110),
    (1431, 2009, 12, 18, 0b100100101110),
    (1432, 2010, 12, 7, 0b001010101110),
    (1433, 2011, 11, 26, 0b010101101101),
    (1434, 2012, 11, 15, 0b101101101010),
    (1435, 2013, 11, 5, 0b101101010010),
    (1436, 2014, 10, 25, 0b101010100101),
    (1437, 2015, 10, 14, 0b100100101101),
    (1438, 2016, 10, 2, 0b010001011011),
    (1439, 2017, 9, 21, 0b100010111011),
    (1440, 2018, 9, 11, 0b001010111010),
    (1441, 2019, 8, 31, 0b010110110101),
    (1442, 2020, 8, 20, 0b110110101001),
    (1443, 2021, 8, 10, 0b101101010010),
    (1444, 2022, 7, 30, 0b101010101010),
    (1445, 2023, 7, 19, 0b100100110110),
    (1446, 2024, 7, 7, 0b001001101101),
    (1447, 2025, 6, 26, 0b001011101101),
    (1448, 2026, 6, 16, 0b101011101010),
    (1449, 2027, 6, 6, 0b011011010100),
    (1450, 2028, 5, 25, 0b111010101001),
    (1451, 2029, 5, 15, 0b110101010010),
    (1452, 2030, 5, 4, 0b101010100110),
    (1453, 2031, 4, 23, 0b010101010110),
    (1454, 2032, 4, 11, 0b101010110101),
    (1455, 2033, 4, 1, 0b010110110010),
    (1456, 2034, 3, 21, 0b101110101001),
    (1457, 2035, 3, 11, 0b101101010010),
    (1458, 2036, 2, 28, 0b101010100101),
    (1459, 2037, 2, 16, 0b010101001011),
    (1460, 2038, 2, 5, 0b101010011011),
    (1461, 2039, 1, 26, 0b010101011010),
    (1462, 2040, 1, 15, 0b101011010101),
    (1463, 2041, 1, 4, 0b011010101010),
    (1464, 2041, 12, 24, 0b111010100101),
    (1465, 2042, 12, 14, 0b110101001010),
    (1466, 2043, 12, 3, 0b101010010110),
    (1467, 2044, 11, 21, 0b100100101110),
    (1468, 2045, 11, 10, 0b101001011101),
    (1469, 2046, 10, 31, 0b010101011100),
    (1470, 2047, 10, 20, 0b101011010101),
    (1471, 2048, 10, 9, 0b011010101010),
    (1472, 2049, 9, 28, 0b011010010101),
    (1473, 2050, 9, 17, 0b010100101011),
    (1474, 2051, 9, 6, 0b101001011011),
    (1475, 2052, 8, 26, 0b010010111010),
    (1476, 2053, 8, 15, 0b100101111010),
    (1477, 2054, 8, 5, 0b001101110100),
    (1478, 2055, 7, 25, 0b101101101001),
    (1479, 2056, 7, 14, 0b101011001010),
    (1480, 2057, 7, 3, 0b101001010101),
    (1481, 2058, 6, 22, 0b010010101101),
    (1482, 2059, 6, 11, 0b100101101101),
    (1483, 2060, 5, 31, 0b101011101010),
    (1484, 2061, 5, 21, 0b010111101000),
    (1485, 2062, 5, 10, 0b110111010001),
    (1486, 2063, 4, 30, 0b110110100100),
    (1487, 2064, 4, 18, 0b110101001010),
    (1488, 2065, 4, 7, 0b101001010101),
    (1489, 2066, 3, 27, 0b001010110101),
    (1490, 2067, 3, 16, 0b010110101101),
    (1491, 2068, 3, 5, 0b101110101010),
    (1492, 2069, 2, 23, 0b011101010100),
    (1493, 2070, 2, 12, 0b011101000101),
    (1494, 2071, 2, 1, 0b011010001011),
    (1495, 2072, 1, 21, 0b010100100111),
    (1496, 2073, 1, 9, 0b101001010111),
    (1497, 2073, 12, 30, 0b001010110110),
    (1498, 2074, 12, 19, 0b010110110101),
    (1499, 2075, 12, 9, 0b110110101010),
    (1500, 2076, 11, 28, 0b110101010010),
];
